//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (e.g. `"info"`)
/// is used.
pub fn init_tracing(default_directive: &str) -> Result<(), ServerError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| ServerError::Config(format!("invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| ServerError::Config(format!("failed to install subscriber: {}", e)))
}
