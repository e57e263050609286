//! Server configuration.
//!
//! Reads configuration from environment variables:
//! - `POC_API_HOST`: listen address (default: "0.0.0.0")
//! - `POC_API_PORT`: listen port (default: "8080")
//! - `POC_API_PING_TIMEOUT_SECS`: ping subprocess timeout, `0` disables it
//!   (default: "30")

use std::time::Duration;

use crate::error::ServerError;

pub const HOST_VAR: &str = "POC_API_HOST";
pub const PORT_VAR: &str = "POC_API_PORT";
pub const PING_TIMEOUT_VAR: &str = "POC_API_PING_TIMEOUT_SECS";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PING_TIMEOUT: Duration = Duration::from_secs(30);

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen host.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Upper bound on the ping subprocess; `None` waits indefinitely.
    pub ping_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ping_timeout: Some(DEFAULT_PING_TIMEOUT),
        }
    }
}

impl ServerConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| {
                ServerError::Config(format!("{} must be a port number, got '{}'", PORT_VAR, port))
            })?;
        }
        if let Some(secs) = lookup(PING_TIMEOUT_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ServerError::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    PING_TIMEOUT_VAR, secs
                ))
            })?;
            config.ping_timeout = timeout_from_secs(secs);
        }

        Ok(config)
    }

    /// The `host:port` string the listener binds to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Zero seconds means no timeout.
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.ping_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn variables_override_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "9090"),
            (PING_TIMEOUT_VAR, "0"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9090");
        assert_eq!(config.ping_timeout, None);
    }

    #[test]
    fn bad_port_is_a_config_error() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().contains("POC_API_PORT"));
    }

    #[test]
    fn bad_timeout_is_a_config_error() {
        let err =
            ServerConfig::from_lookup(lookup(&[(PING_TIMEOUT_VAR, "-1")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
