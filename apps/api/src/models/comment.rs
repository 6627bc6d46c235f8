use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::SafeUser;

/// A comment row as stored: created once via the writer endpoint, never
/// updated or deleted through this surface.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommentRow {
    pub id: String,
    pub listing_id: String,
    pub user_id: String,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

/// Flat projection of a comment joined with its author, as the reader
/// query returns it.
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthorRow {
    pub id: String,
    pub listing_id: String,
    pub user_id: String,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub author_name: Option<String>,
    pub author_image: Option<String>,
    pub author_email_verified: Option<DateTime<Utc>>,
    pub author_created_at: DateTime<Utc>,
    pub author_updated_at: DateTime<Utc>,
}

/// Transport-safe comment with its author embedded and all date fields
/// coerced to ISO-8601 strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SafeComment {
    pub id: String,
    pub listing_id: String,
    pub user_id: String,
    pub text: String,
    pub rating: i32,
    pub created_at: String,
    pub user: SafeUser,
}

impl From<CommentWithAuthorRow> for SafeComment {
    fn from(row: CommentWithAuthorRow) -> Self {
        SafeComment {
            id: row.id,
            listing_id: row.listing_id,
            user_id: row.user_id.clone(),
            text: row.text,
            rating: row.rating,
            created_at: row.created_at.to_rfc3339(),
            user: SafeUser {
                id: row.user_id,
                name: row.author_name,
                image: row.author_image,
                email_verified: row.author_email_verified.map(|d| d.to_rfc3339()),
                created_at: row.author_created_at.to_rfc3339(),
                updated_at: row.author_updated_at.to_rfc3339(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_safe_comment_embeds_author_and_formats_dates() {
        let ts = Utc.with_ymd_and_hms(2023, 6, 1, 17, 30, 0).unwrap();
        let row = CommentWithAuthorRow {
            id: "c1".into(),
            listing_id: "L1".into(),
            user_id: "u1".into(),
            text: "Great stay".into(),
            rating: 5,
            created_at: ts,
            author_name: Some("Ada".into()),
            author_image: None,
            author_email_verified: None,
            author_created_at: ts,
            author_updated_at: ts,
        };

        let safe = SafeComment::from(row);
        assert_eq!(safe.user.id, "u1");
        assert_eq!(safe.created_at, "2023-06-01T17:30:00+00:00");

        let json = serde_json::to_value(&safe).unwrap();
        assert_eq!(json["listingId"], "L1");
        assert!(json["user"]["emailVerified"].is_null());
    }
}
