use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::comment::{CommentWithAuthorRow, SafeComment};

/// Fetches the comments for a listing (or all comments when no listing id is
/// given), each with its author embedded and every date coerced to an
/// ISO-8601 string. Zero matches is an empty vector, never an error; a
/// data-access failure maps to `AppError::Database`.
pub async fn get_comments(
    pool: &PgPool,
    listing_id: Option<&str>,
) -> Result<Vec<SafeComment>, AppError> {
    let rows: Vec<CommentWithAuthorRow> = sqlx::query_as(
        r#"
        SELECT c.id, c.listing_id, c.user_id, c.text, c.rating, c.created_at,
               u.name           AS author_name,
               u.image          AS author_image,
               u.email_verified AS author_email_verified,
               u.created_at     AS author_created_at,
               u.updated_at     AS author_updated_at
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE $1::text IS NULL OR c.listing_id = $1
        ORDER BY c.created_at
        "#,
    )
    .bind(listing_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(SafeComment::from).collect())
}
