//! Application state shared by all handlers.
//!
//! Handlers share no mutable state, so [`AppState`] is a cheap clone of the
//! [`DemoService`].

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::DemoService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Side-effecting endpoint logic (subprocesses, environment).
    pub service: Arc<DemoService>,
}

impl AppState {
    /// Creates a new `AppState` from the given configuration.
    pub fn new(config: &ServerConfig) -> Self {
        AppState {
            service: Arc::new(DemoService::new(config.ping_timeout)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ServerConfig::default())
    }
}
