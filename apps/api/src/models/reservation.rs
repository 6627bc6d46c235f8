use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reservation row. Reservation creation and pricing live in another
/// subsystem; the detail view reads these only to block out booked dates.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationRow {
    pub id: String,
    pub listing_id: String,
    pub user_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeReservation {
    pub id: String,
    pub listing_id: String,
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
    pub total_price: i64,
    pub created_at: String,
}

impl From<ReservationRow> for SafeReservation {
    fn from(row: ReservationRow) -> Self {
        SafeReservation {
            id: row.id,
            listing_id: row.listing_id,
            user_id: row.user_id,
            start_date: row.start_date.to_rfc3339(),
            end_date: row.end_date.to_rfc3339(),
            total_price: row.total_price,
            created_at: row.created_at.to_rfc3339(),
        }
    }
}
