//! Sleepwell Quotes - Server Entry Point
//!
//! Composition root: reads configuration, builds the quote store and ports,
//! starts the REST and/or JSON-RPC transports, and waits for Ctrl+C.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use config::{LogFormat, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sleepwell_api_rest::RestServer;
use sleepwell_api_rpc::RpcServer;
use sleepwell_core::domain::QuoteStore;
use sleepwell_core::port::{Picker, RandomPicker, SeededPicker, SystemTimeProvider};
use sleepwell_core::SleepService;

const DEFAULT_LOG_FILTER: &str = "sleepwell=info,tower_http=info";
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = ServerConfig::from_env()?;

    // 2. Initialize logging
    init_logging(config.log_format)?;

    info!(
        "Sleepwell Quotes v{} starting (mode: {:?})...",
        sleepwell_core::VERSION,
        config.mode
    );

    // 3. Setup dependencies (DI wiring)
    let store = QuoteStore::builtin().context("Built-in quote catalog is invalid")?;
    info!(quotes = store.len(), categories = store.categories().len(), "Quote store loaded");

    let picker: Arc<dyn Picker> = match config.picker_seed {
        Some(seed) => {
            info!(seed, "Using seeded picker");
            Arc::new(SeededPicker::new(seed))
        }
        None => Arc::new(RandomPicker),
    };

    let service = Arc::new(SleepService::new(
        Arc::new(store),
        Arc::new(SystemTimeProvider),
        picker,
    ));

    // 4. Start transports
    let rpc_handle = if config.mode.serves_rpc() {
        let (handle, addr) = RpcServer::new(config.rpc.clone(), service.clone())
            .start()
            .await
            .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;
        info!("JSON-RPC endpoint: http://{}", addr);
        Some(handle)
    } else {
        None
    };

    let rest_handle = if config.mode.serves_rest() {
        let handle = RestServer::new(config.rest.clone(), service.clone())
            .start()
            .await
            .map_err(|e| anyhow::anyhow!("REST server start failed: {}", e))?;
        info!("REST endpoint: http://{}", handle.local_addr());
        Some(handle)
    } else {
        None
    };

    info!("System ready. Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 6. Graceful shutdown
    if let Some(mut handle) = rest_handle {
        handle.stop();
        if tokio::time::timeout(SHUTDOWN_GRACE, handle.stopped())
            .await
            .is_err()
        {
            warn!("REST server did not drain within {:?}", SHUTDOWN_GRACE);
        }
    }

    if let Some(handle) = rpc_handle {
        handle
            .stop()
            .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
        let _ = tokio::time::timeout(SHUTDOWN_GRACE, handle.stopped()).await;
    }

    telemetry::shutdown();
    info!("Shutdown complete.");

    Ok(())
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    let (otel, otel_error) = match telemetry::otel_layer() {
        Ok(layer) => (layer, None),
        Err(e) => (None, Some(e)),
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(otel);

    match format {
        // Production: JSON structured logging
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        // Development: Pretty formatting with colors
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }

    if let Some(e) = otel_error {
        warn!(error = %e, "OpenTelemetry disabled (continuing without it)");
    }

    Ok(())
}
