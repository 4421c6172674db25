//! # CityCare Runtime Binary
//!
//! Loads configuration from the environment, starts the runtime and waits
//! for Ctrl+C.

use anyhow::{Context, Result};
use civic_runtime::container::RuntimeConfig;
use civic_runtime::CivicRuntime;
use civic_telemetry::{init_telemetry, TelemetryConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry = init_telemetry(&TelemetryConfig::from_env())
        .context("Failed to initialize telemetry")?;

    let config = RuntimeConfig::from_env().context("Failed to load configuration")?;
    let runtime = CivicRuntime::new(config)?;
    runtime.start().await?;

    info!("CityCare runtime ready. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    runtime.shutdown().await;
    Ok(())
}
