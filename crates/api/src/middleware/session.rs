//! Per-request authorization context extracted from the session cookie.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use crate::auth::session::{validate_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// The two independent access flags for the current request.
///
/// Built once at request entry from the signed session cookie and passed
/// explicitly to handlers via the extractor, instead of being read from
/// ambient global state. A missing, malformed, expired, or tampered cookie
/// yields the anonymous context (both flags false) -- extraction itself
/// never fails; the capability guards decide what to reject.
///
/// ```ignore
/// async fn my_handler(ctx: SessionContext) -> AppResult<Json<()>> {
///     tracing::debug!(is_admin = ctx.is_admin, is_readonly = ctx.is_readonly, "handling");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SessionContext {
    /// Admin flag: full mutation rights.
    pub is_admin: bool,
    /// Read-only flag: viewing only; blocks all mutation.
    pub is_readonly: bool,
}

impl SessionContext {
    /// The context of a visitor with no valid session.
    pub const ANONYMOUS: SessionContext = SessionContext {
        is_admin: false,
        is_readonly: false,
    };

    /// Whether this context may view reservation data.
    pub fn can_view(&self) -> bool {
        self.is_admin || self.is_readonly
    }

    /// Whether this context may mutate reservation data.
    ///
    /// The read-only flag always blocks mutation, regardless of the admin
    /// flag -- the view-only guarantee wins over admin rights.
    pub fn can_write(&self) -> bool {
        !self.is_readonly && self.is_admin
    }
}

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token_from_cookies(parts) else {
            return Ok(SessionContext::ANONYMOUS);
        };

        match validate_session_token(&token, &state.config.session) {
            Ok(claims) => Ok(SessionContext {
                is_admin: claims.admin,
                is_readonly: claims.readonly,
            }),
            Err(err) => {
                tracing::debug!(error = %err, "Rejected session cookie, treating as anonymous");
                Ok(SessionContext::ANONYMOUS)
            }
        }
    }
}

/// Pull the session token out of the `Cookie` header, if present.
fn session_token_from_cookies(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_context_permissions() {
        let ctx = SessionContext::ANONYMOUS;
        assert!(!ctx.can_view());
        assert!(!ctx.can_write());
    }

    #[test]
    fn test_admin_context_permissions() {
        let ctx = SessionContext {
            is_admin: true,
            is_readonly: false,
        };
        assert!(ctx.can_view());
        assert!(ctx.can_write());
    }

    #[test]
    fn test_readonly_context_permissions() {
        let ctx = SessionContext {
            is_admin: false,
            is_readonly: true,
        };
        assert!(ctx.can_view());
        assert!(!ctx.can_write());
    }

    #[test]
    fn test_readonly_blocks_mutation_even_for_admin() {
        // Both flags set cannot be minted through the API, but the
        // precedence is defined anyway: read-only wins.
        let ctx = SessionContext {
            is_admin: true,
            is_readonly: true,
        };
        assert!(ctx.can_view());
        assert!(!ctx.can_write());
    }
}
