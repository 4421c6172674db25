//! Store configuration.

use std::time::Duration;

/// Default deadline for a single store call.
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

/// Storage settings shared by the issue and account stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Deadline for each store call in milliseconds.
    pub store_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_timeout_ms: DEFAULT_STORE_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    /// Short deadline so stalled-store tests finish quickly.
    pub fn for_testing() -> Self {
        Self {
            store_timeout_ms: 250,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}
