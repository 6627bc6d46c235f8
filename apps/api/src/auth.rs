use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::UserRow;

/// Narrow seam to the external authentication subsystem: resolve the current
/// identity for a request, or `None` when there is no authenticated caller.
/// Session storage and credential handling belong to that subsystem; this
/// surface only consumes the result.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn current_user(&self, headers: &HeaderMap) -> Result<Option<UserRow>, AppError>;
}

/// Resolves identity from a bearer session token against the auth
/// subsystem's session table.
pub struct SessionAuth {
    pool: PgPool,
}

impl SessionAuth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthProvider for SessionAuth {
    async fn current_user(&self, headers: &HeaderMap) -> Result<Option<UserRow>, AppError> {
        let Some(token) = bearer_token(headers) else {
            return Ok(None);
        };

        let user: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT u.id, u.name, u.image, u.email_verified, u.created_at, u.updated_at
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.session_token = $1 AND s.expires > now()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
/// Malformed or missing headers yield `None`, which the caller treats as
/// an unauthenticated request.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with("Bearer abc123");
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_missing_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_non_bearer_scheme_yields_none() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_empty_token_yields_none() {
        let headers = headers_with("Bearer ");
        assert_eq!(bearer_token(&headers), None);
    }
}
