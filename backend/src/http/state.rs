//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state passed to all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
