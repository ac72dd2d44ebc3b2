//! Aarav CLI and REST API entry point.
//!
//! Binary name: `aarav`
//!
//! `serve` starts the HTTP relay; `chat` opens a terminal conversation
//! against a running server; `health` pings it.

mod cli;
mod http;
mod state;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use state::AppState;

#[derive(Parser)]
#[command(name = "aarav", version, about = "Aarav cultural guide chat relay")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the chat relay server
    Serve {
        /// Port to bind (overrides config and $PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Path to an aarav.toml config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Chat with Aarav from the terminal
    Chat {
        /// Base URL of a running server
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,

        /// Reuse an existing session id instead of generating one
        #[arg(long)]
        session: Option<String>,
    },

    /// Check a running server's health
    Health {
        /// Base URL of a running server
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,aarav=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port, host, config } => {
            let mut config = aarav_infra::config::load_config(config.as_deref()).await?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }

            let state = AppState::init(&config)?;
            let router = http::router::build_router(state);

            let addr = format!("{}:{}", config.host, config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, model = %config.model, "Aarav server listening");

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("server stopped");
        }

        Commands::Chat { url, session } => {
            cli::chat::run_chat_loop(&url, session).await?;
        }

        Commands::Health { url } => {
            cli::health::check_health(&url).await?;
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
