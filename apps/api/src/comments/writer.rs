use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::comment::CommentRow;

/// Submission body for a new comment. Fields are optional at the serde layer
/// so presence can be checked explicitly and reported as a validation error
/// instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: Option<String>,
    pub rating: Option<i32>,
}

/// A submission that passed validation: non-empty listing id, non-empty
/// text, and a non-zero numeric rating. Beyond rejecting zero, ratings are
/// unbounded and the text has no length limit; the store accepts whatever
/// passes here.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidatedComment {
    pub listing_id: String,
    pub text: String,
    pub rating: i32,
}

pub fn validate(listing_id: &str, req: &CreateCommentRequest) -> Result<ValidatedComment, AppError> {
    if listing_id.is_empty() {
        return Err(AppError::Validation("listingId must be a non-empty string".into()));
    }

    let text = match req.text.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => return Err(AppError::Validation("text must be a non-empty string".into())),
    };

    // Zero is rejected like empty text and an empty listing id: it is the
    // submission form's untouched default, not a rating anyone picked.
    let rating = match req.rating {
        Some(rating) if rating != 0 => rating,
        _ => return Err(AppError::Validation("rating must be a non-zero number".into())),
    };

    Ok(ValidatedComment {
        listing_id: listing_id.to_string(),
        text,
        rating,
    })
}

/// Inserts exactly one comment row for the authenticated user and returns it.
/// No duplicate-submission guard and no side effect beyond the insert.
pub async fn create_comment(
    pool: &PgPool,
    user_id: &str,
    comment: &ValidatedComment,
) -> Result<CommentRow, AppError> {
    let row: CommentRow = sqlx::query_as(
        r#"
        INSERT INTO comments (id, listing_id, user_id, text, rating, created_at)
        VALUES ($1, $2, $3, $4, $5, now())
        RETURNING id, listing_id, user_id, text, rating, created_at
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&comment.listing_id)
    .bind(user_id)
    .bind(&comment.text)
    .bind(comment.rating)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
