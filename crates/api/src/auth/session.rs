//! Signed session tokens and the cookie that carries them.
//!
//! A session is an HS256-signed JWT holding two independent access flags:
//! `admin` (full mutation rights) and `readonly` (viewing only). The token
//! travels in an HttpOnly cookie; the signature means the server keeps no
//! session state of its own. Login and read-only entry each mint a fresh
//! token with exactly one flag set, so a token with both flags cannot be
//! issued through the API.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "jezera_session";

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Admin flag: while set, all operations are permitted (unless the
    /// read-only flag blocks mutation first).
    pub admin: bool,
    /// Read-only flag: while set, mutating operations are rejected.
    pub readonly: bool,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit logs.
    pub jti: String,
}

/// Configuration for session signing and the admin credential.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify session tokens.
    pub secret: String,
    /// Shared admin credential checked at login.
    pub admin_password: String,
    /// Session lifetime in hours (default: 12).
    pub session_expiry_hours: i64,
}

/// Default session expiry in hours.
const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 12;

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                | Required | Default |
    /// |------------------------|----------|---------|
    /// | `SESSION_SECRET`       | **yes**  | --      |
    /// | `ADMIN_PASSWORD`       | **yes**  | --      |
    /// | `SESSION_EXPIRY_HOURS` | no       | `12`    |
    ///
    /// # Panics
    ///
    /// Panics if either required variable is unset or empty. There is no
    /// fallback credential.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let admin_password =
            std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set in the environment");
        assert!(!admin_password.is_empty(), "ADMIN_PASSWORD must not be empty");

        let session_expiry_hours: i64 = std::env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_HOURS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_HOURS must be a valid i64");

        Self {
            secret,
            admin_password,
            session_expiry_hours,
        }
    }
}

/// Generate a signed session token with the given flags.
pub fn generate_session_token(
    admin: bool,
    readonly: bool,
    config: &SessionConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.session_expiry_hours * 3600;

    let claims = SessionClaims {
        admin,
        readonly,
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`SessionClaims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_session_token(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Build the `Set-Cookie` value that installs a session token.
///
/// HttpOnly so scripts cannot read the token; SameSite=Lax so cross-site
/// POSTs cannot ride the session.
pub fn session_cookie(token: &str, config: &SessionConfig) -> String {
    let max_age = config.session_expiry_hours * 3600;
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}")
}

/// Build the `Set-Cookie` value that clears the session (logout / exit).
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> SessionConfig {
        SessionConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            admin_password: "test-admin-password".to_string(),
            session_expiry_hours: 12,
        }
    }

    #[test]
    fn test_generate_and_validate_admin_token() {
        let config = test_config();
        let token = generate_session_token(true, false, &config)
            .expect("token generation should succeed");

        let claims =
            validate_session_token(&token, &config).expect("token validation should succeed");
        assert!(claims.admin);
        assert!(!claims.readonly);
        assert!(claims.exp > claims.iat);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_generate_and_validate_readonly_token() {
        let config = test_config();
        let token = generate_session_token(false, true, &config)
            .expect("token generation should succeed");

        let claims =
            validate_session_token(&token, &config).expect("token validation should succeed");
        assert!(!claims.admin);
        assert!(claims.readonly);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token, well past the default
        // 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = SessionClaims {
            admin: true,
            readonly: false,
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = validate_session_token(&token, &config);
        assert!(result.is_err(), "expired token must fail validation");
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = SessionConfig {
            secret: "secret-alpha".to_string(),
            ..test_config()
        };
        let config_b = SessionConfig {
            secret: "secret-bravo".to_string(),
            ..test_config()
        };

        let token = generate_session_token(true, false, &config_a)
            .expect("token generation should succeed");

        let result = validate_session_token(&token, &config_b);
        assert!(
            result.is_err(),
            "token signed with a different secret must fail"
        );
    }

    #[test]
    fn test_cookie_shape() {
        let config = test_config();
        let cookie = session_cookie("abc.def.ghi", &config);
        assert!(cookie.starts_with("jezera_session=abc.def.ghi;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=43200"));

        let cleared = clear_session_cookie();
        assert!(cleared.contains("Max-Age=0"));
    }
}
