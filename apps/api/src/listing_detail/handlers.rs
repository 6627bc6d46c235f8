use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::comments::reader::get_comments;
use crate::errors::AppError;
use crate::listing_detail::view::{compose, compute_emotional_summary, ListingDetail};
use crate::models::listing::{ListingRow, SafeListing};
use crate::models::reservation::ReservationRow;
use crate::models::user::UserRow;
use crate::state::AppState;

/// Optional stay selection for the price quote. The quote only applies when
/// both ends of the range are given.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// GET /api/listings/:listing_id?startDate=...&endDate=...
///
/// Composes the detail-page payload: listing with owner, reservations and
/// the derived disabled dates, a total-price quote for the selected stay,
/// all comments with authors, and the aggregate emotional summary computed
/// once for this request.
pub async fn handle_get_listing_detail(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
    Query(stay): Query<StayQuery>,
) -> Result<Json<ListingDetail>, AppError> {
    let listing: Option<ListingRow> = sqlx::query_as(
        r#"
        SELECT id, title, description, image_src, category, room_count,
               bathroom_count, guest_count, location_value, user_id, price, created_at
        FROM listings
        WHERE id = $1
        "#,
    )
    .bind(&listing_id)
    .fetch_optional(&state.db)
    .await?;

    let listing =
        listing.ok_or_else(|| AppError::NotFound(format!("Listing {listing_id} not found")))?;

    let owner: UserRow = sqlx::query_as(
        "SELECT id, name, image, email_verified, created_at, updated_at FROM users WHERE id = $1",
    )
    .bind(&listing.user_id)
    .fetch_one(&state.db)
    .await?;

    let reservations: Vec<ReservationRow> = sqlx::query_as(
        r#"
        SELECT id, listing_id, user_id, start_date, end_date, total_price, created_at
        FROM reservations
        WHERE listing_id = $1
        ORDER BY start_date
        "#,
    )
    .bind(&listing_id)
    .fetch_all(&state.db)
    .await?;

    let comments = get_comments(&state.db, Some(&listing_id)).await?;
    let emotional_summary = compute_emotional_summary(&state.classifier, &comments).await;

    let listing = SafeListing::from_row(listing, owner.into());
    let selected_stay = stay.start_date.zip(stay.end_date);
    Ok(Json(compose(
        listing,
        reservations,
        &comments,
        emotional_summary,
        selected_stay,
    )))
}
