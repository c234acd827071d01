use crate::types::{LearningRecordRow, UpsertLearningRecordParams};
use sqlx::PgPool;

/// Upsert a learning record for (user, word). A repeated save keeps the
/// review count and updates the review flag.
pub async fn upsert(
    pool: &PgPool,
    p: &UpsertLearningRecordParams,
) -> Result<LearningRecordRow, sqlx::Error> {
    sqlx::query_as::<_, LearningRecordRow>(
        r#"
        INSERT INTO learning_records (user_id, word, in_review_list)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, word) DO UPDATE SET
            in_review_list = EXCLUDED.in_review_list,
            updated_at = NOW()
        RETURNING id, user_id, word, review_count, in_review_list, created_at, updated_at
        "#,
    )
    .bind(&p.user_id)
    .bind(&p.word)
    .bind(p.in_review_list)
    .fetch_one(pool)
    .await
}

/// Get all learning records for a user
pub async fn get_for_user(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<LearningRecordRow>, sqlx::Error> {
    sqlx::query_as::<_, LearningRecordRow>(
        r#"
        SELECT id, user_id, word, review_count, in_review_list, created_at, updated_at
        FROM learning_records
        WHERE user_id = $1
        ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Get the records a user has flagged for review
pub async fn get_review_list(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<LearningRecordRow>, sqlx::Error> {
    sqlx::query_as::<_, LearningRecordRow>(
        r#"
        SELECT id, user_id, word, review_count, in_review_list, created_at, updated_at
        FROM learning_records
        WHERE user_id = $1 AND in_review_list = TRUE
        ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Increment the review count for a record, scoped to its owner.
/// Returns None when no such record exists.
pub async fn increment_review_count(
    pool: &PgPool,
    id: &str,
    user_id: &str,
) -> Result<Option<LearningRecordRow>, sqlx::Error> {
    sqlx::query_as::<_, LearningRecordRow>(
        r#"
        UPDATE learning_records
        SET review_count = review_count + 1, updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, word, review_count, in_review_list, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Set or clear the review flag for a record, scoped to its owner.
/// Returns None when no such record exists.
pub async fn set_review_status(
    pool: &PgPool,
    id: &str,
    user_id: &str,
    in_review_list: bool,
) -> Result<Option<LearningRecordRow>, sqlx::Error> {
    sqlx::query_as::<_, LearningRecordRow>(
        r#"
        UPDATE learning_records
        SET in_review_list = $3, updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, word, review_count, in_review_list, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(in_review_list)
    .fetch_optional(pool)
    .await
}
