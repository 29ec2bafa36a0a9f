//! weekday-server
//!
//! Example HTTP application whose every route, and every redirect target, is
//! a `route_scheme` scheme.
//!
//! ```text
//!     GET /                              → "Hello, World."
//!     GET /negate/<int>                  → negated integer
//!     GET /negative/<int>                → 301 /negate/<int>
//!     GET /reverse/<string>              → reversed string
//!     GET /reversed/<string>             → 301 /reverse/<string>
//!     GET /weekday/<locale>/<y>/<m>/<d>  → weekday name in that language
//!     GET /weekday/<locale>/today        → 302 /weekday/<locale>/<today>
//!     anything else                      → 404
//! ```

mod app;
mod config;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use crate::app::Routes;
use crate::config::ServerConfig;

#[derive(Parser, Debug)]
#[command(name = "weekday-server")]
#[command(about = "Example HTTP server routed by typed path schemes", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    config.validate()?;

    logging::init(&config.logging);

    tracing::info!("weekday-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        format = ?config.logging.format,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.bind_address()?).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let app = app::app(Arc::new(Routes::new()));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
