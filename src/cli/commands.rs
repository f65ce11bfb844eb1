//! CLI command implementations
//!
//! `serve` builds the HTTP server from the parsed flags, creates a tokio
//! runtime, and blocks on the serve loop until the process is stopped.

use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, HttpServerConfig};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Execute a single CLI command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { host, port } => serve(&host, port),
    }
}

/// Start the HTTP server and serve until shutdown
pub fn serve(host: &str, port: u16) -> CliResult<()> {
    init_tracing();

    let config = HttpServerConfig::with_addr(host, port);
    let server = HttpServer::with_config(config);

    tracing::info!(addr = %server.socket_addr(), "starting user directory server");

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// INFO by default, overridable via RUST_LOG; request traces at debug
fn init_tracing() {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if let Ok(directive) = "tower_http=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();
}
