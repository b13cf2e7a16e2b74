//! FAQ service.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────────┐
//!                        │                  FAQ SERVICE                  │
//!                        │                                               │
//!     Client Request     │  ┌──────────┐    ┌──────────┐    ┌─────────┐  │
//!     ───────────────────┼─▶│middleware│───▶│ handlers │───▶│  store  │  │
//!                        │  │cors/trace│    │ faqs     │    │ (mutex) │  │
//!                        │  └──────────┘    │ uploads  │    └─────────┘  │
//!                        │                  │ translate│───▶ uploads dir │
//!                        │                  └────┬─────┘                 │
//!                        │                       │                       │
//!                        │                       ▼                       │
//!                        │              ┌────────────────┐               │
//!                        │              │   Translator   │───────────────┼──▶ Provider
//!                        │              └────────────────┘               │
//!                        └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use faq_service::config::{load_config, validate_config, FaqConfig};
use faq_service::http::HttpServer;
use faq_service::lifecycle::{wait_for_signal, Shutdown};
use faq_service::observability::init_logging;

#[derive(Parser)]
#[command(name = "faq-service")]
#[command(about = "In-memory FAQ service with uploads and translation", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:5050).
    #[arg(short, long)]
    bind: Option<String>,
}

fn load(cli: &Cli) -> Result<FaqConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FaqConfig::default(),
    };
    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(faq_service::config::ConfigError::Validation)?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    init_logging(&config.observability);
    tracing::info!("faq-service v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upload_dir = %config.uploads.directory,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
