//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as production)
//! on top of a test database pool, plus request/response conveniences and
//! session-cookie login helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use jezera_api::auth::session::SessionConfig;
use jezera_api::config::ServerConfig;
use jezera_api::router::build_app_router;
use jezera_api::state::AppState;

/// Admin credential used by every test config.
pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

/// Build a test `ServerConfig` with safe defaults and known secrets.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig {
            secret: "integration-test-session-secret".to_string(),
            admin_password: TEST_ADMIN_PASSWORD.to_string(),
            session_expiry_hours: 12,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors production via `build_app_router`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should not fail")
}

fn with_optional_cookie(
    builder: axum::http::request::Builder,
    cookie: Option<&str>,
) -> axum::http::request::Builder {
    match cookie {
        Some(c) => builder.header(COOKIE, c),
        None => builder,
    }
}

/// GET a path without a session.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    get_with_cookie(app, uri, None).await
}

/// GET a path with an optional session cookie.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let builder = with_optional_cookie(Request::builder().method("GET").uri(uri), cookie);
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// POST a JSON body with an optional session cookie.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: Value,
    cookie: Option<&str>,
) -> Response<Body> {
    let builder = with_optional_cookie(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json"),
        cookie,
    );
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// POST with an empty body and an optional session cookie.
pub async fn post_empty(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let builder = with_optional_cookie(Request::builder().method("POST").uri(uri), cookie);
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// PUT a JSON body with an optional session cookie.
pub async fn put_json(app: Router, uri: &str, body: Value, cookie: Option<&str>) -> Response<Body> {
    let builder = with_optional_cookie(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json"),
        cookie,
    );
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// DELETE a path with an optional session cookie.
pub async fn delete(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let builder = with_optional_cookie(Request::builder().method("DELETE").uri(uri), cookie);
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Session helpers
// ---------------------------------------------------------------------------

/// Extract the `name=value` pair from a response's `Set-Cookie` header.
pub fn session_cookie_from(response: &Response<Body>) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a session cookie")
        .to_str()
        .expect("cookie should be valid UTF-8");
    header
        .split(';')
        .next()
        .expect("cookie should have a name=value pair")
        .to_string()
}

/// Log in as admin and return the session cookie to attach to requests.
pub async fn admin_cookie(app: Router) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "password": TEST_ADMIN_PASSWORD }),
        None,
    )
    .await;
    assert!(
        response.status().is_success(),
        "admin login should succeed, got {}",
        response.status()
    );
    session_cookie_from(&response)
}

/// Enter read-only mode and return the session cookie.
pub async fn readonly_cookie(app: Router) -> String {
    let response = post_empty(app, "/api/v1/auth/readonly", None).await;
    assert!(
        response.status().is_success(),
        "read-only entry should succeed, got {}",
        response.status()
    );
    session_cookie_from(&response)
}

/// A well-formed reservation body for create/update requests.
pub fn reservation_body(guest: &str, check_in: &str, check_out: &str) -> Value {
    serde_json::json!({
        "guest_name": guest,
        "platform": "airbnb",
        "check_in": check_in,
        "check_out": check_out,
        "adults": 2,
        "children": 0,
        "special_requests": null,
        "notes": null,
    })
}
