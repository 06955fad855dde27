pub mod auth;
pub mod reservations;
