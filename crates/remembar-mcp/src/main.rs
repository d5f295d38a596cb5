//! Remembar MCP server binary.
//!
//! Serves the memory tools over streamable HTTP so a hosted assistant can
//! call in. See the library docs for the environment variables it reads.

use std::sync::Arc;

use anyhow::Result;
use remembar_core::BridgeConfig;
use remembar_mcp::{create_router, Adapter};
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let config = BridgeConfig::from_env()?;
    let addr = config.bind_addr();

    info!(
        addr = %addr,
        store = %config.store_url,
        tenant = %config.tenant_id,
        tunnel_bypass = config.tunnel_bypass,
        "Starting Remembar MCP server"
    );

    let adapter = Arc::new(Adapter::new(config)?);
    let app = create_router(adapter);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MCP endpoint ready at http://{}{}", addr, remembar_mcp::http::MCP_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
