//! Waitline Daemon - Main Entry Point
//!
//! Composition root: wires the in-memory store, id/time providers, and
//! the queue registry into the HTTP server.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use waitline_api_http::{HttpServer, HttpServerConfig};
use waitline_core::application::QueueRegistry;
use waitline_core::port::id_provider::UuidProvider;
use waitline_core::port::time_provider::SystemTimeProvider;
use waitline_infra_memory::MemoryQueueStore;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging (pretty for development, JSON for production)
    let log_format = std::env::var("WAITLINE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Waitline v{} starting...", VERSION);

    // 2. Load configuration
    let http_config = HttpServerConfig {
        host: std::env::var("WAITLINE_HTTP_HOST")
            .unwrap_or_else(|_| HttpServerConfig::default().host),
        port: std::env::var("WAITLINE_HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| HttpServerConfig::default().port),
    };

    // 3. Setup dependencies (DI wiring)
    //
    // Storage is in-memory only: queues are forgotten when the process
    // exits. A durable QueueStore can be swapped in here without touching
    // the registry or handlers.
    let store = Arc::new(MemoryQueueStore::new());
    let registry = Arc::new(QueueRegistry::new(
        store,
        Arc::new(UuidProvider),
        Arc::new(SystemTimeProvider),
    ));

    // 4. Start HTTP server
    let server = HttpServer::new(http_config, registry);
    let handle = server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server start failed: {}", e))?;

    info!(addr = %handle.local_addr(), "System ready");
    info!("Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");
    handle.stop().await;

    info!("Shutdown complete.");
    Ok(())
}
