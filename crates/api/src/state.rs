use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is internally reference counted, the
/// config is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: jezera_db::DbPool,
    /// Server configuration (session secret, admin credential, network).
    pub config: Arc<ServerConfig>,
}
