//! Test doubles for the lifecycle controller.

use crate::ports::AccountLookup;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{AccountId, AccountSummary, CivicError, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Account lookup over a fixed set of summaries.
#[derive(Default)]
pub struct StaticAccountLookup {
    accounts: RwLock<HashMap<AccountId, AccountSummary>>,
}

impl StaticAccountLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account in `ward` and returns its id.
    pub fn add(&self, name: &str, ward: &str) -> AccountId {
        let id = AccountId::new();
        self.accounts.write().insert(
            id,
            AccountSummary {
                id,
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                ward: ward.to_string(),
                avatar: String::new(),
            },
        );
        id
    }

    pub fn remove(&self, id: AccountId) {
        self.accounts.write().remove(&id);
    }
}

#[async_trait]
impl AccountLookup for StaticAccountLookup {
    async fn summary(&self, id: AccountId) -> Result<Option<AccountSummary>, CivicError> {
        Ok(self.accounts.read().get(&id).cloned())
    }
}

/// Lookup that answers a fixed number of calls, then fails every call with
/// a storage timeout.
pub struct FlakyAccountLookup {
    inner: Arc<StaticAccountLookup>,
    remaining: AtomicUsize,
    calls: AtomicUsize,
}

impl FlakyAccountLookup {
    pub fn new(inner: Arc<StaticAccountLookup>, healthy_calls: usize) -> Self {
        Self {
            inner,
            remaining: AtomicUsize::new(healthy_calls),
            calls: AtomicUsize::new(0),
        }
    }

    /// Allows `n` more successful calls.
    pub fn heal(&self, n: usize) {
        self.remaining.store(n, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountLookup for FlakyAccountLookup {
    async fn summary(&self, id: AccountId) -> Result<Option<AccountSummary>, CivicError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let healthy = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if healthy {
            self.inner.summary(id).await
        } else {
            Err(StoreError::Timeout {
                operation: "accounts.find_by_id",
                elapsed_ms: 250,
            }
            .into())
        }
    }
}
