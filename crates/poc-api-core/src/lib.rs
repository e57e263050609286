//! Response-building rules for the poc-api demonstration service.
//!
//! Everything here is synchronous and free of HTTP types. The server crate
//! wires these functions to routes; the CLI reads the route catalog.

pub mod environment;
pub mod error;
pub mod messages;
pub mod ping;
pub mod routes;

// Re-export commonly used types
pub use environment::EnvironmentSnapshot;
pub use error::{require, CoreError};
pub use ping::PingCommand;
pub use routes::{QueryParam, RouteSpec};
