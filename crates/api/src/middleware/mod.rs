pub mod guards;
pub mod session;
