//! Route definitions for session management.
//!
//! Mounted at `/auth` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes.
///
/// ```text
/// POST /login           -> login (admin credential)
/// POST /logout          -> logout
/// POST /readonly        -> enter_readonly (no credential)
/// POST /exit-readonly   -> exit_readonly
/// GET  /session         -> session_info
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/readonly", post(auth::enter_readonly))
        .route("/exit-readonly", post(auth::exit_readonly))
        .route("/session", get(auth::session_info))
}
