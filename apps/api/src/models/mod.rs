pub mod comment;
pub mod listing;
pub mod reservation;
pub mod user;
