use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

use crate::comments::reader::get_comments;
use crate::comments::writer::{create_comment, validate, CreateCommentRequest};
use crate::errors::AppError;
use crate::models::comment::{CommentRow, SafeComment};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingIdQuery {
    pub listing_id: Option<String>,
}

/// GET /api/comments?listingId=...
pub async fn handle_list_comments(
    State(state): State<AppState>,
    Query(params): Query<ListingIdQuery>,
) -> Result<Json<Vec<SafeComment>>, AppError> {
    let comments = get_comments(&state.db, params.listing_id.as_deref()).await?;
    Ok(Json(comments))
}

/// POST /api/comments/:listing_id
///
/// Authenticates first (no insert happens for anonymous callers), then
/// validates, then performs the single row insert and echoes the created
/// comment back.
pub async fn handle_create_comment(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<CommentRow>, AppError> {
    let current_user = state
        .auth
        .current_user(&headers)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let validated = validate(&listing_id, &req)?;
    let comment = create_comment(&state.db, &current_user.id, &validated).await?;

    tracing::info!(
        "User {} commented on listing {} (rating {})",
        comment.user_id,
        comment.listing_id,
        comment.rating
    );

    Ok(Json(comment))
}
