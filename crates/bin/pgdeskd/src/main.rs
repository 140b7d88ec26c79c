//! # pgdeskd: paying-guest front desk daemon
//!
//! Composition root that wires the backend client into the console server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise structured logging
//! - Construct the REST backend client (adapter)
//! - Build the axum router, injecting the backend via the port trait
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use pgdesk_adapter_backend_reqwest::ReqwestBackend;
use pgdesk_adapter_http_axum::router;
use pgdesk_adapter_http_axum::state::AppState;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let backend = ReqwestBackend::new(config.api_url(), config.timeout())?;
    tracing::info!(api_url = backend.base_url(), "using backend");

    let app = router::build(AppState::new(backend));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("pgdeskd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("pgdeskd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
