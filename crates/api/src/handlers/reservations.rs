//! Handlers for the `/reservations` resource.
//!
//! Every mutation runs the pure validation rules before touching the store;
//! a failed rule rejects the write with a 400 and leaves the store unchanged.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use jezera_core::error::CoreError;
use jezera_core::reservation::{validate_guest_name, validate_party, validate_stay_dates};
use jezera_core::types::{Day, DbId};
use jezera_db::models::reservation::{
    CreateReservation, Reservation, ReservationExport, UpdateReservation,
};
use jezera_db::repositories::ReservationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::guards::{RequireViewer, RequireWrite};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Payload for the read-only calendar view: the ordered reservations plus
/// today's date so the client can mark the current day.
#[derive(Debug, Serialize)]
pub struct CalendarView {
    pub today: Day,
    pub reservations: Vec<Reservation>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Run every field rule for a candidate write. The caller must not touch the
/// store if this fails.
fn validate_fields(
    guest_name: &str,
    check_in: Day,
    check_out: Day,
    adults: i32,
    children: i32,
) -> Result<(), AppError> {
    validate_guest_name(guest_name)
        .and_then(|()| validate_stay_dates(check_in, check_out))
        .and_then(|()| validate_party(adults, children))
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/reservations
///
/// List all reservations ordered by check-in date (ties in insertion order).
pub async fn list_reservations(
    RequireViewer(_ctx): RequireViewer,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let reservations = ReservationRepo::list_ordered(&state.pool).await?;
    Ok(Json(DataResponse { data: reservations }))
}

/// GET /api/v1/reservations/{id}
///
/// Get a single reservation by id.
pub async fn get_reservation(
    RequireViewer(_ctx): RequireViewer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reservation = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;

    Ok(Json(DataResponse { data: reservation }))
}

/// POST /api/v1/reservations
///
/// Create a new reservation. Admin only; validated before the insert.
pub async fn create_reservation(
    RequireWrite(_ctx): RequireWrite,
    State(state): State<AppState>,
    Json(input): Json<CreateReservation>,
) -> AppResult<impl IntoResponse> {
    validate_fields(
        &input.guest_name,
        input.check_in,
        input.check_out,
        input.adults,
        input.children,
    )?;

    let reservation = ReservationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        reservation_id = reservation.id,
        guest_name = %reservation.guest_name,
        platform = %reservation.platform,
        check_in = %reservation.check_in,
        check_out = %reservation.check_out,
        "Reservation created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: reservation })))
}

/// PUT /api/v1/reservations/{id}
///
/// Replace all mutable fields of an existing reservation. Admin only;
/// validated before the write.
pub async fn update_reservation(
    RequireWrite(_ctx): RequireWrite,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReservation>,
) -> AppResult<impl IntoResponse> {
    validate_fields(
        &input.guest_name,
        input.check_in,
        input.check_out,
        input.adults,
        input.children,
    )?;

    let reservation = ReservationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;

    tracing::info!(reservation_id = id, "Reservation updated");

    Ok(Json(DataResponse { data: reservation }))
}

/// DELETE /api/v1/reservations/{id}
///
/// Delete a reservation. Admin only, irreversible.
pub async fn delete_reservation(
    RequireWrite(_ctx): RequireWrite,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ReservationRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }));
    }

    tracing::info!(reservation_id = id, "Reservation deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/reservations/calendar
///
/// Read-only calendar rendering of the same ordered data, with today's date.
pub async fn calendar_view(
    RequireViewer(_ctx): RequireViewer,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let reservations = ReservationRepo::list_ordered(&state.pool).await?;
    let today = chrono::Utc::now().date_naive();

    Ok(Json(DataResponse {
        data: CalendarView {
            today,
            reservations,
        },
    }))
}

/// GET /api/v1/reservations/export
///
/// Machine-readable listing: a bare JSON array of records with exactly the
/// documented key set (no envelope, no `created_at`). Unauthenticated --
/// external consumers poll this without a session.
pub async fn export_reservations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ReservationExport>>> {
    let reservations = ReservationRepo::list_ordered(&state.pool).await?;
    let records = reservations
        .into_iter()
        .map(ReservationExport::from)
        .collect();
    Ok(Json(records))
}
