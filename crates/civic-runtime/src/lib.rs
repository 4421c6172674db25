//! # CityCare Runtime
//!
//! Wires the CityCare subsystems into one process.
//!
//! ## Modular Structure
//!
//! - `container/` - Configuration and dependency wiring
//! - `bootstrap` - Default administrator provisioning
//! - `handlers/` - Error presentation for outer surfaces
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from `CC_*` environment variables
//! 2. In production, reject the shipped admin password and registration code
//! 3. Build stores and services
//! 4. Ensure the default administrator exists
//! 5. Signal ready

pub mod bootstrap;
pub mod container;
pub mod handlers;

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

use crate::bootstrap::bootstrap;
use crate::container::{RuntimeConfig, ServiceContainer};

/// The CityCare process.
pub struct CivicRuntime {
    container: Arc<ServiceContainer>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl CivicRuntime {
    /// Builds every subsystem. Production configs are validated first.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        if config.security.production_mode {
            config
                .validate_for_production()
                .context("Refusing to start with insecure configuration")?;
        }

        info!("Creating CityCare runtime");
        let container =
            Arc::new(ServiceContainer::new(config).context("Failed to build services")?);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            container,
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Runs startup tasks.
    pub async fn start(&self) -> Result<()> {
        info!("===========================================");
        info!("  CityCare Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        let report = bootstrap(&self.container)
            .await
            .context("Failed to bootstrap default admin")?;

        info!(
            admin_created = report.admin_created,
            production = self.container.config.security.production_mode,
            "All subsystems initialized and running"
        );
        Ok(())
    }

    /// Signals shutdown to every subscriber.
    pub async fn shutdown(&self) {
        info!("Initiating graceful shutdown...");
        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }
        info!("Shutdown complete");
    }

    /// Receiver that flips to `true` on shutdown.
    pub fn shutdown_signal(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    pub fn container(&self) -> Arc<ServiceContainer> {
        Arc::clone(&self.container)
    }
}
