//! Handlers for the `/auth` resource: admin login/logout, read-only
//! entry/exit, and session introspection.
//!
//! Each successful transition mints a fresh session token with exactly one
//! flag set, so entering one mode always leaves the other (matching the
//! flag-clearing behavior of the original session routes).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use jezera_core::error::CoreError;

use crate::auth::credential::verify_admin_credential;
use crate::auth::session::{clear_session_cookie, generate_session_token, session_cookie};
use crate::error::{AppError, AppResult};
use crate::middleware::session::SessionContext;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Current session flags, returned by every auth endpoint.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub is_admin: bool,
    pub is_readonly: bool,
}

impl From<SessionContext> for SessionInfo {
    fn from(ctx: SessionContext) -> Self {
        SessionInfo {
            is_admin: ctx.is_admin,
            is_readonly: ctx.is_readonly,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Present the admin credential. On success the response installs an admin
/// session cookie (admin flag set, read-only flag cleared).
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if !verify_admin_credential(&input.password, &state.config.session.admin_password) {
        tracing::warn!("Failed admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid admin password".into(),
        )));
    }

    let token = generate_session_token(true, false, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Session token error: {e}")))?;

    tracing::info!("Admin logged in");

    Ok((
        [(SET_COOKIE, session_cookie(&token, &state.config.session))],
        Json(DataResponse {
            data: SessionInfo {
                is_admin: true,
                is_readonly: false,
            },
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Clear the session cookie, returning the visitor to anonymous.
pub async fn logout() -> impl IntoResponse {
    tracing::info!("Admin logged out");
    (
        [(SET_COOKIE, clear_session_cookie())],
        StatusCode::NO_CONTENT,
    )
}

/// POST /api/v1/auth/readonly
///
/// Enter read-only mode. No credential required: the read-only role grants
/// viewing only, which the export endpoint already exposes without auth.
/// Installs a session cookie with the read-only flag set and the admin flag
/// cleared.
pub async fn enter_readonly(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let token = generate_session_token(false, true, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Session token error: {e}")))?;

    tracing::info!("Read-only session started");

    Ok((
        [(SET_COOKIE, session_cookie(&token, &state.config.session))],
        Json(DataResponse {
            data: SessionInfo {
                is_admin: false,
                is_readonly: true,
            },
        }),
    ))
}

/// POST /api/v1/auth/exit-readonly
///
/// Leave read-only mode by clearing the session cookie.
pub async fn exit_readonly() -> impl IntoResponse {
    tracing::info!("Read-only session ended");
    (
        [(SET_COOKIE, clear_session_cookie())],
        StatusCode::NO_CONTENT,
    )
}

/// GET /api/v1/auth/session
///
/// Report the current session flags. Anonymous visitors get both false;
/// this endpoint never rejects.
pub async fn session_info(ctx: SessionContext) -> Json<DataResponse<SessionInfo>> {
    Json(DataResponse { data: ctx.into() })
}
