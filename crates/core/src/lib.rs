//! Domain types and validation rules for the Jezera rental reservation
//! system. This crate is pure: no I/O, no async, no framework types.

pub mod error;
pub mod reservation;
pub mod types;
