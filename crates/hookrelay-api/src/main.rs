//! Hookrelay gateway entry point.
//!
//! Binary name: `hookrelay`
//!
//! Parses CLI arguments, loads configuration, builds the upstream engine
//! client and dispatcher, then starts the HTTP server.

mod http;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hookrelay_core::dispatch::Dispatcher;
use hookrelay_infra::config::load_config;
use hookrelay_infra::upstream::UpstreamClient;
use state::AppState;

#[derive(Parser)]
#[command(name = "hookrelay", about = "Webhook invocation gateway", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway HTTP server
    Serve {
        /// Path to the TOML configuration file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,

        /// Override the bind address from the config file
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,hookrelay=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { config, bind } => {
            let config = load_config(&config).await;
            let bind_addr = bind.unwrap_or(config.bind_addr);

            let client = Arc::new(UpstreamClient::new(config.upstream));
            let dispatcher = Dispatcher::new(Arc::clone(&client), client);
            let app = http::router::build_router(AppState::new(dispatcher, config.settings));

            let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
            tracing::info!(addr = %bind_addr, "hookrelay listening");
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
