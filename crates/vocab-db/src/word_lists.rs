use crate::types::{SaveWordListParams, WordListRow};
use sqlx::PgPool;

/// Save a new word list, returning the stored row
pub async fn save(pool: &PgPool, p: &SaveWordListParams) -> Result<WordListRow, sqlx::Error> {
    sqlx::query_as::<_, WordListRow>(
        r#"
        INSERT INTO word_lists (user_id, name, words)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, name, words, created_at, updated_at
        "#,
    )
    .bind(&p.user_id)
    .bind(&p.name)
    .bind(&p.words)
    .fetch_one(pool)
    .await
}

/// Get all word lists for a user, newest first
pub async fn get_for_user(pool: &PgPool, user_id: &str) -> Result<Vec<WordListRow>, sqlx::Error> {
    sqlx::query_as::<_, WordListRow>(
        r#"
        SELECT id, user_id, name, words, created_at, updated_at
        FROM word_lists
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Get a single word list by id
pub async fn get_by_id(pool: &PgPool, id: &str) -> Result<Option<WordListRow>, sqlx::Error> {
    sqlx::query_as::<_, WordListRow>(
        r#"
        SELECT id, user_id, name, words, created_at, updated_at
        FROM word_lists
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
