use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::SafeUser;

/// A listing row. The listing catalogue is owned elsewhere; the detail view
/// only reads it to compose the page payload.
#[derive(Debug, Clone, FromRow)]
pub struct ListingRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub category: String,
    pub room_count: i32,
    pub bathroom_count: i32,
    pub guest_count: i32,
    pub location_value: String,
    pub user_id: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub category: String,
    pub room_count: i32,
    pub bathroom_count: i32,
    pub guest_count: i32,
    pub location_value: String,
    pub user_id: String,
    pub price: i64,
    pub created_at: String,
    pub user: SafeUser,
}

impl SafeListing {
    pub fn from_row(row: ListingRow, owner: SafeUser) -> Self {
        SafeListing {
            id: row.id,
            title: row.title,
            description: row.description,
            image_src: row.image_src,
            category: row.category,
            room_count: row.room_count,
            bathroom_count: row.bathroom_count,
            guest_count: row.guest_count,
            location_value: row.location_value,
            user_id: row.user_id,
            price: row.price,
            created_at: row.created_at.to_rfc3339(),
            user: owner,
        }
    }
}
