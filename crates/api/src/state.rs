use std::sync::Arc;

use crate::auth::session::RevokedSessions;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: voltcom_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Admin sessions ended by logout before their expiry.
    pub revoked_sessions: Arc<RevokedSessions>,
}
