pub mod auth;
pub mod health;
pub mod reservations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                   admin login (public)
/// /auth/logout                  clear session
/// /auth/readonly                read-only entry (public, no credential)
/// /auth/exit-readonly           clear session
/// /auth/session                 current session flags
///
/// /reservations                 list (viewer), create (write)
/// /reservations/calendar        calendar view (viewer)
/// /reservations/export          machine-readable listing (public)
/// /reservations/{id}            get (viewer), update/delete (write)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/reservations", reservations::router())
}
