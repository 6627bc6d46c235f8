pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::comments::handlers as comment_handlers;
use crate::listing_detail::handlers as listing_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Comment API
        .route("/api/comments", get(comment_handlers::handle_list_comments))
        .route(
            "/api/comments/:listing_id",
            post(comment_handlers::handle_create_comment),
        )
        // Listing detail API
        .route(
            "/api/listings/:listing_id",
            get(listing_handlers::handle_get_listing_detail),
        )
        .with_state(state)
}
