//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging on stderr, and serves the catalog
//! tools on the configured transport until the client disconnects.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use entity_enum_mcp_server::core::{Config, McpServer, TransportService};
use entity_enum_mcp_server::domains::tools::ToolRegistry;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging.level);

    match run(config).await {
        Ok(()) => {
            info!("Server shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Server failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<()> {
    info!("Starting {} v{}", config.server.name, config.server.version);
    config.log_backend();

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config);

    info!("Registered tools: {}", ToolRegistry::tool_names().join(", "));

    transport
        .run(server)
        .await
        .context("MCP transport terminated")?;

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Output goes to stderr; stdout carries the MCP protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
