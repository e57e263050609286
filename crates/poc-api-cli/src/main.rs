//! poc-api command-line interface.
//!
//! Provides the `poc-api` binary with subcommands for running the
//! demonstration server and listing the routes it serves. `serve` starts
//! from the same environment-derived configuration as the `poc-api-server`
//! binary and lets flags override individual fields.

use std::process;

use clap::{Parser, Subcommand};

use poc_api_core::routes;
use poc_api_server::config::{timeout_from_secs, ServerConfig};
use poc_api_server::error::ServerError;
use poc_api_server::logging::init_tracing;
use poc_api_server::server::serve;

/// Deliberately vulnerable demonstration API.
#[derive(Parser)]
#[command(name = "poc-api", about = "Deliberately vulnerable demonstration API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve {
        /// Listen host (overrides POC_API_HOST).
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides POC_API_PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Ping subprocess timeout in seconds, 0 to disable
        /// (overrides POC_API_PING_TIMEOUT_SECS).
        #[arg(long)]
        ping_timeout_secs: Option<u64>,

        /// Log filter used when RUST_LOG is unset.
        #[arg(long, default_value = "info")]
        log: String,
    },
    /// Print the route catalog as JSON.
    Routes {
        /// Print only the route registered at this path (e.g. /api/ping).
        path: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Serve {
            host,
            port,
            ping_timeout_secs,
            log,
        } => run_serve(host, port, ping_timeout_secs, &log),
        Commands::Routes { path } => run_routes(path.as_deref()),
    };
    process::exit(exit_code);
}

/// Execute the serve subcommand.
///
/// Returns exit code: 0 = clean shutdown, 1 = configuration error,
/// 3 = I/O error.
fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    ping_timeout_secs: Option<u64>,
    log: &str,
) -> i32 {
    if let Err(e) = init_tracing(log) {
        eprintln!("Error: {}", e);
        return 1;
    }

    let mut config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    apply_overrides(&mut config, host, port, ping_timeout_secs);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {}", e);
            return 3;
        }
    };

    match runtime.block_on(serve(config)) {
        Ok(()) => 0,
        Err(ServerError::Config(msg)) => {
            eprintln!("Error: invalid configuration: {}", msg);
            1
        }
        Err(ServerError::Io(e)) => {
            eprintln!("I/O error: {}", e);
            3
        }
    }
}

fn apply_overrides(
    config: &mut ServerConfig,
    host: Option<String>,
    port: Option<u16>,
    ping_timeout_secs: Option<u64>,
) {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(secs) = ping_timeout_secs {
        config.ping_timeout = timeout_from_secs(secs);
    }
}

/// Execute the routes subcommand.
///
/// Returns exit code: 0 = printed, 1 = serialization error, 2 = no route
/// at the requested path.
fn run_routes(path: Option<&str>) -> i32 {
    let json = match path {
        None => serde_json::to_string_pretty(routes::catalog()),
        Some(path) => match routes::find(path) {
            Some(route) => serde_json::to_string_pretty(route),
            None => {
                eprintln!("Error: no route at '{}'", path);
                return 2;
            }
        },
    };

    match json {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize route catalog: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_parse() {
        let cli = Cli::try_parse_from([
            "poc-api",
            "serve",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--ping-timeout-secs",
            "0",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve {
                host,
                port,
                ping_timeout_secs,
                log,
            } => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(9000));
                assert_eq!(ping_timeout_secs, Some(0));
                assert_eq!(log, "info");
            }
            Commands::Routes { .. } => panic!("expected serve"),
        }
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let mut config = ServerConfig::default();
        apply_overrides(&mut config, None, Some(9000), Some(5));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.ping_timeout, Some(Duration::from_secs(5)));

        apply_overrides(&mut config, Some("localhost".into()), None, Some(0));
        assert_eq!(config.addr(), "localhost:9000");
        assert_eq!(config.ping_timeout, None);
    }

    #[test]
    fn routes_accepts_optional_path() {
        let cli = Cli::try_parse_from(["poc-api", "routes", "/api/ping"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Routes { path: Some(ref p) } if p == "/api/ping"
        ));
        let cli = Cli::try_parse_from(["poc-api", "routes"]).unwrap();
        assert!(matches!(cli.command, Commands::Routes { path: None }));
    }

    #[test]
    fn routes_exit_codes() {
        assert_eq!(run_routes(None), 0);
        assert_eq!(run_routes(Some("/api/greet")), 0);
        assert_eq!(run_routes(Some("/api/missing")), 2);
    }

    #[test]
    fn catalog_serializes() {
        let json = serde_json::to_value(routes::catalog()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0]["path"], "/api/hello");
        assert_eq!(entries[0]["params"][0]["required"], false);
    }
}
