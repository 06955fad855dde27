//! Route definitions for the reservation resource.
//!
//! Mounted at `/reservations` by `api_routes()`. Access control lives in the
//! handlers' guard extractors, not here; the static `/calendar` and
//! `/export` segments take precedence over the `/{id}` matcher.

use axum::routing::get;
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Reservation routes.
///
/// ```text
/// GET    /           -> list_reservations (viewer)
/// POST   /           -> create_reservation (write)
/// GET    /calendar   -> calendar_view (viewer)
/// GET    /export     -> export_reservations (public)
/// GET    /{id}       -> get_reservation (viewer)
/// PUT    /{id}       -> update_reservation (write)
/// DELETE /{id}       -> delete_reservation (write)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/calendar", get(reservations::calendar_view))
        .route("/export", get(reservations::export_reservations))
        .route(
            "/{id}",
            get(reservations::get_reservation)
                .put(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        )
}
