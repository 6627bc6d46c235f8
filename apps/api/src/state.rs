use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::AuthProvider;
use crate::classifier::EmotionClassifier;

/// Shared application state injected into all route handlers via Axum
/// extractors. Configuration is consumed at startup and not carried here:
/// the classifier token and database URL are baked into their clients.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub classifier: EmotionClassifier,
    /// Pluggable identity resolution. Default: bearer-session lookup against
    /// the auth subsystem's store.
    pub auth: Arc<dyn AuthProvider>,
}
