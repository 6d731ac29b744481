//! Reminders MCP Server - Main Entry Point
//!
//! This is the main entry point for the reminders MCP server application.
//! The actual implementation is in the `reminders_mcp` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use reminders_mcp::{Config, RemindersServerHandler};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Reminders MCP Server - add reminders through an external script via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the reminder script [default: scripts/add_reminder.sh next to this executable]
    #[arg(long)]
    script: Option<PathBuf>,

    /// List name treated as "no list given" [default: Reminders]
    #[arg(long)]
    default_list: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_overrides(args.script, args.default_list);

    if !config.script_path.exists() {
        warn!(
            script = %config.script_path.display(),
            "reminder script not found; add_reminder calls will fail until it exists"
        );
    }

    info!(script = %config.script_path.display(), "starting reminders MCP server on stdio");
    let handler = RemindersServerHandler::new(config);
    serve_stdio(handler).await?;
    Ok(())
}
