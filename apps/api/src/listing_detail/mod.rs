pub mod comment_view;
pub mod handlers;
pub mod pricing;
pub mod view;
