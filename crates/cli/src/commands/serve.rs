use std::sync::Arc;

use anyhow::Result;
use founderos_http::{AppState, create_router};

use crate::open_storage;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = open_storage().await?;
    tracing::info!(backend = storage.kind(), "storage ready");

    let router = create_router(Arc::new(AppState::new(storage)));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
