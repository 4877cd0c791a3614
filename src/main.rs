//! Identity Hub - Binary Entry Point
//!
//! This is the main entry point for the identity-server binary.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use identity_hub::{create_router, logging, AppConfig, AppState, Store};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::from_env()?;
    logging::init(&config.log_filter);

    let store = if config.seed_defaults {
        Store::with_defaults()
    } else {
        Store::new()
    };

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(store, config));
    let app = create_router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        version = identity_hub::VERSION,
        "identity server listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("identity server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
