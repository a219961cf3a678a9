// Standalone MCP server binary

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use todoapp_core::{SystemClock, TodoStore};
use todoapp_mcp::protocol::ServerInfo;
use todoapp_mcp::tools::builtin_registry;
use todoapp_mcp::{Dispatcher, McpConfig, McpServer};

#[derive(Parser, Debug)]
#[command(name = "todoapp-mcp")]
#[command(about = "In-memory todo list and clock tools over MCP stdio", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "TODOAPP_MCP_CONFIG", default_value = "todoapp-mcp.toml")]
    config: PathBuf,

    /// Log filter directive, overrides the configuration file
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = McpConfig::load(&args.config)?;

    // stdout carries the protocol, so logs go to stderr
    let default_filter = args.log_filter.unwrap_or_else(|| config.log_filter.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("TodoApp MCP server starting...");
    match &config.source {
        Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
        None => tracing::info!("Configuration file not found, using defaults"),
    }

    let store = Arc::new(TodoStore::new());
    let registry = builtin_registry(store, Arc::new(SystemClock), &config.time)
        .context("Invalid time zone configuration")?;

    tracing::info!(
        "Registered {} tools (time zone: {})",
        registry.len(),
        config.time.name
    );

    let info = ServerInfo {
        name: config.server.name.clone(),
        version: config.server.version.clone(),
    };
    let server = McpServer::new(Dispatcher::new(registry), info)
        .with_max_line_length(config.transport.max_line_length);
    server.start().await?;

    Ok(())
}
