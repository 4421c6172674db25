//! # Service Container
//!
//! Builds every subsystem and hands out shared handles.
//!
//! ```text
//! InMemoryAccountStore ─→ DeadlineAccountStore ─┐
//!                              Argon2Hasher ────┴─→ IdentityDirectory
//!                                                        │
//!                                          DirectoryAccountLookup
//!                                                        │
//! InMemoryIssueStore ─→ DeadlineIssueStore ─┬─→ LifecycleController
//!                                           └─→ StatisticsAggregator
//! ```

use super::config::RuntimeConfig;
use cc_01_identity_directory::{
    AccountStore, Argon2Hasher, DeadlineAccountStore, IdentityApi, IdentityDirectory,
    InMemoryAccountStore,
};
use cc_02_issue_store::{DeadlineIssueStore, InMemoryIssueStore, IssueRepository};
use cc_04_lifecycle_controller::{DirectoryAccountLookup, LifecycleApi, LifecycleController};
use cc_05_statistics::{StatisticsAggregator, StatisticsApi};
use shared_types::{CivicError, SystemTimeSource, TimeSource};
use std::sync::Arc;
use tracing::info;

/// Shared handles to every subsystem API.
pub struct ServiceContainer {
    pub config: RuntimeConfig,
    pub identity: Arc<dyn IdentityApi>,
    pub lifecycle: Arc<dyn LifecycleApi>,
    pub statistics: Arc<dyn StatisticsApi>,
}

impl ServiceContainer {
    /// Wires in-memory stores behind deadline guards.
    pub fn new(config: RuntimeConfig) -> Result<Self, CivicError> {
        let deadline = config.store.timeout();
        let accounts = Arc::new(DeadlineAccountStore::new(
            InMemoryAccountStore::new(),
            deadline,
        ));
        let issues = Arc::new(DeadlineIssueStore::new(InMemoryIssueStore::new(), deadline));
        Self::with_stores(config, accounts, issues, Arc::new(SystemTimeSource))
    }

    /// Wires the services around caller-supplied stores and clock.
    pub fn with_stores(
        config: RuntimeConfig,
        accounts: Arc<dyn AccountStore>,
        issues: Arc<dyn IssueRepository>,
        time: Arc<dyn TimeSource>,
    ) -> Result<Self, CivicError> {
        let hasher = Argon2Hasher::new(
            config.identity.hash_memory_kib,
            config.identity.hash_iterations,
        )?;

        let identity: Arc<dyn IdentityApi> = Arc::new(IdentityDirectory::new(
            accounts,
            Arc::new(hasher),
            Arc::clone(&time),
            config.identity.clone(),
        ));

        let lifecycle: Arc<dyn LifecycleApi> = Arc::new(LifecycleController::new(
            Arc::clone(&issues),
            Arc::new(DirectoryAccountLookup::new(Arc::clone(&identity))),
            time,
            config.lifecycle.clone(),
        ));

        let statistics: Arc<dyn StatisticsApi> = Arc::new(StatisticsAggregator::new(issues));

        info!(
            store_timeout_ms = config.store.store_timeout_ms,
            max_page_size = config.lifecycle.max_page_size,
            production = config.security.production_mode,
            "Service container ready"
        );

        Ok(Self {
            config,
            identity,
            lifecycle,
            statistics,
        })
    }
}
