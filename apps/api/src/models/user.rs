use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row as the authentication subsystem stores it. Read-only here:
/// the comment surface embeds authors but never mutates them.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub email_verified: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Transport-safe author view: every date is an ISO-8601 string, and
/// `emailVerified` is an explicit `null` when absent rather than omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SafeUser {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub email_verified: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserRow> for SafeUser {
    fn from(row: UserRow) -> Self {
        SafeUser {
            id: row.id,
            name: row.name,
            image: row.image,
            email_verified: row.email_verified.map(|d| d.to_rfc3339()),
            created_at: row.created_at.to_rfc3339(),
            updated_at: row.updated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_row(verified: bool) -> UserRow {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        UserRow {
            id: "u1".into(),
            name: Some("Ada".into()),
            image: None,
            email_verified: verified.then_some(ts),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_dates_serialize_as_iso8601_strings() {
        let safe = SafeUser::from(sample_row(true));
        assert_eq!(safe.created_at, "2024-01-02T15:04:05+00:00");
        assert_eq!(safe.email_verified.as_deref(), Some("2024-01-02T15:04:05+00:00"));
    }

    #[test]
    fn test_unverified_email_serializes_to_explicit_null() {
        let safe = SafeUser::from(sample_row(false));
        let json = serde_json::to_value(&safe).unwrap();
        // The key must be present with a null value, never dropped.
        assert!(json.as_object().unwrap().contains_key("emailVerified"));
        assert!(json["emailVerified"].is_null());
    }
}
