//! Binary entrypoint for the poc-api HTTP server.
//!
//! Configuration comes from environment variables; see
//! [`poc_api_server::config`].

use poc_api_server::config::ServerConfig;
use poc_api_server::error::ServerError;
use poc_api_server::logging::init_tracing;
use poc_api_server::server::serve;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_tracing("info")?;

    let config = ServerConfig::from_env()?;
    serve(config).await
}
