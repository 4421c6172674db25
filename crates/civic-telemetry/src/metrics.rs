//! Prometheus metrics for the CityCare core.
//!
//! All metrics follow the naming convention: `cc_<subject>_<metric>_total`

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Metrics registry for this process
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // ISSUE LIFECYCLE
    // =========================================================================

    /// Issues accepted from citizen reports
    pub static ref ISSUES_CREATED: Counter = Counter::new(
        "cc_issues_created_total",
        "Total number of issues reported"
    ).expect("metric creation failed");

    /// Status transitions by target status
    pub static ref ISSUE_TRANSITIONS: CounterVec = CounterVec::new(
        Opts::new("cc_issue_transitions_total", "Issue status transitions"),
        &["to"]
    ).expect("metric creation failed");

    /// Issues permanently removed
    pub static ref ISSUES_DELETED: Counter = Counter::new(
        "cc_issues_deleted_total",
        "Total number of issues deleted"
    ).expect("metric creation failed");

    // =========================================================================
    // ACCESS & IDENTITY
    // =========================================================================

    /// Policy denials by operation
    pub static ref ACCESS_DENIED: CounterVec = CounterVec::new(
        Opts::new("cc_access_denied_total", "Operations denied by the access policy"),
        &["operation"]
    ).expect("metric creation failed");

    /// Accounts created by role
    pub static ref ACCOUNTS_REGISTERED: CounterVec = CounterVec::new(
        Opts::new("cc_accounts_registered_total", "Accounts created"),
        &["role"]
    ).expect("metric creation failed");

    // =========================================================================
    // STORAGE
    // =========================================================================

    /// Store calls that exceeded their deadline
    pub static ref STORE_TIMEOUTS: CounterVec = CounterVec::new(
        Opts::new("cc_store_timeouts_total", "Store calls that exceeded their deadline"),
        &["operation"]
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the process registry.
///
/// Collectors already registered are skipped, so repeated calls succeed.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(ISSUES_CREATED.clone()),
        Box::new(ISSUE_TRANSITIONS.clone()),
        Box::new(ISSUES_DELETED.clone()),
        Box::new(ACCESS_DENIED.clone()),
        Box::new(ACCOUNTS_REGISTERED.clone()),
        Box::new(STORE_TIMEOUTS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
