//! Capability guard extractors.
//!
//! Each guard wraps [`SessionContext`] and rejects requests whose flags do
//! not grant the capability. Use these as extractor parameters to enforce
//! authorization at the type level; the checks themselves are the pure
//! `can_view` / `can_write` predicates on the context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use jezera_core::error::CoreError;

use super::session::SessionContext;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a session that may view reservations (admin or read-only flag).
/// Rejects with 401 otherwise.
///
/// ```ignore
/// async fn listing(RequireViewer(ctx): RequireViewer) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireViewer(pub SessionContext);

impl FromRequestParts<AppState> for RequireViewer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = SessionContext::from_request_parts(parts, state).await?;
        if !ctx.can_view() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Please log in as admin or enter read-only mode to view reservations".into(),
            )));
        }
        Ok(RequireViewer(ctx))
    }
}

/// Requires a session that may mutate reservations.
///
/// The read-only flag is checked first and always blocks mutation (403),
/// regardless of the admin flag. Without the admin flag the request is
/// rejected with 401.
pub struct RequireWrite(pub SessionContext);

impl FromRequestParts<AppState> for RequireWrite {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = SessionContext::from_request_parts(parts, state).await?;
        if ctx.is_readonly {
            return Err(AppError::Core(CoreError::Forbidden(
                "You are in read-only mode. You cannot modify reservations.".into(),
            )));
        }
        if !ctx.can_write() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Please login as admin to modify reservations".into(),
            )));
        }
        Ok(RequireWrite(ctx))
    }
}
