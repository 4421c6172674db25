//! # Civic Telemetry
//!
//! Observability for the CityCare core.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` with an env filter and either JSON
//!   (containers) or pretty (development) output
//! - **Metrics**: Prometheus counters for issue lifecycle, access denials and
//!   store health
//!
//! ## Usage
//!
//! ```rust,ignore
//! use civic_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(&config).expect("Failed to init telemetry");
//!     // Logs and metrics are now being collected
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CC_SERVICE_NAME` | `citycare` | Service name in log records |
//! | `CC_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `CC_JSON_LOGS` | `false` (true in containers) | JSON formatted logs |
//! | `CC_CONSOLE_OUTPUT` | `true` | Emit logs to stdout |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    gather_metrics, register_metrics, MetricsHandle, ACCESS_DENIED, ACCOUNTS_REGISTERED,
    ISSUES_CREATED, ISSUES_DELETED, ISSUE_TRANSITIONS, STORE_TIMEOUTS,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard that must be held for the lifetime of the application.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let metrics_handle = register_metrics()?;
    init_logging(config)?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        _metrics: metrics_handle,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}

/// Log an issue-related event with standard fields.
///
/// ```rust,ignore
/// log_issue_event!(info, "lifecycle", "Issue resolved", issue.id(), status = %status);
/// ```
#[macro_export]
macro_rules! log_issue_event {
    ($level:ident, $component:expr, $msg:expr, $issue_id:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            issue_id = %$issue_id,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log an account-related event with standard fields.
#[macro_export]
macro_rules! log_account_event {
    ($level:ident, $component:expr, $msg:expr, $account_id:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            account_id = %$account_id,
            $($($field)*,)?
            $msg
        )
    };
}
