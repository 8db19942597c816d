// Hazard Catalog - Web Server
// Serves the outlook and alert option lists over HTTP

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hazard_catalog::server::router;

#[derive(Parser)]
#[clap(author, version, about = "Read-only HTTP API for weather hazard categories")]
struct Cli {
    /// Address to bind the HTTP listener to
    #[clap(long, env = "HAZARD_CATALOG_ADDR", default_value = "0.0.0.0:3000")]
    addr: SocketAddr,

    /// Tracing filter, e.g. "info" or "tower_http=debug"
    #[clap(long, env = "HAZARD_CATALOG_LOG", default_value = "info")]
    log_level: String,
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level)?)
        .init();

    let app = router();

    let listener = tokio::net::TcpListener::bind(cli.addr)
        .await
        .with_context(|| format!("failed to bind to {}", cli.addr))?;

    info!(addr = %cli.addr, version = hazard_catalog::VERSION, "hazard catalog listening");
    info!("options: http://{}/api/options/{{outlooks,alerts}}", cli.addr);

    axum::serve(listener, app)
        .await
        .context("server terminated")?;

    Ok(())
}
