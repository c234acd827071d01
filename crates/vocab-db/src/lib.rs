pub mod learning_records;
pub mod migrate;
pub mod types;
pub mod word_lists;

pub use sqlx::postgres::PgPool;
pub use types::*;
