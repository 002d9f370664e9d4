//! route-dispatch server and routing-table tools.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request         ┌──────────────────────────────────────────────┐
//!     ───────────────────────┼─▶ http::server ──▶ http::request            │
//!                            │   (axum, layers)   (strip query, decode,     │
//!                            │                     collapse slashes)        │
//!                            │                          │                   │
//!                            │                          ▼                   │
//!                            │   routing::Dispatcher (first match wins)     │
//!                            │          │                     │             │
//!                            │          ▼                     ▼             │
//!     Client Response        │   controllers::*          NotFoundError      │
//!     ◀──────────────────────┼── (handler Response)      (404 Not Found)    │
//!                            │                                              │
//!                            │   config ─▶ lifecycle::startup ─▶ routing    │
//!                            │   observability: tracing + metrics           │
//!                            └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use route_dispatch::config::{load_config, RouterConfig};
use route_dispatch::controllers::HandlerTable;
use route_dispatch::lifecycle::{build_dispatcher, startup};
use route_dispatch::observability::logging::init_logging;
use route_dispatch::routing::RouteSummary;

#[derive(Parser)]
#[command(name = "route-dispatch")]
#[command(about = "Method + path router with named segment parameters", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve HTTP requests (default)
    Serve,
    /// Print the compiled routing table as JSON
    Routes,
    /// Resolve METHOD PATH without invoking the handler
    Match {
        method: String,
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            tracing::info!("route-dispatch v{} starting", env!("CARGO_PKG_VERSION"));
            startup::run(config).await?;
            tracing::info!("Shutdown complete");
        }
        Commands::Routes => {
            let dispatcher = build_dispatcher(&config.effective_routes(), &HandlerTable::builtin())?;
            let table: Vec<RouteSummary> = dispatcher.routes().iter().map(|r| r.summary()).collect();
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Commands::Match { method, path } => {
            let dispatcher = build_dispatcher(&config.effective_routes(), &HandlerTable::builtin())?;
            match dispatcher.find(&method, &path) {
                Ok(matched) => {
                    println!("{}", serde_json::to_string_pretty(&matched.summary())?);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
