//! # gambit-server entry point
//!
//! Parses command-line arguments, initializes tracing, spawns the session
//! task with the built-in relay engine, and serves until terminated.

use std::net::IpAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use gambit_core::engine::relay::RelayEngine;
use gambit_server::state::AppState;
use gambit_server::{app, hub};

/// Turn-gated two-seat game coordinator over WebSockets.
#[derive(Parser, Debug)]
#[command(name = "gambit-server", version, about, long_about = None)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    bind: IpAddr,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let handle = hub::spawn(Box::new(RelayEngine::new()));
    let router = app(AppState::new(handle));

    let listener = TcpListener::bind((cli.bind, cli.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "gambit server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
