//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use clawshare_core::config::AppConfig;
use clawshare_service::ShareService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Share lifecycle service
    pub share_service: Arc<ShareService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Creates the state, stamping the start time.
    pub fn new(config: Arc<AppConfig>, share_service: Arc<ShareService>) -> Self {
        Self {
            config,
            share_service,
            started_at: Instant::now(),
        }
    }
}
