//! Test doubles for the identity directory.

use crate::adapters::InMemoryAccountStore;
use crate::domain::Account;
use crate::ports::AccountStore;
use async_trait::async_trait;
use shared_types::{AccountId, StoreError};
use std::sync::atomic::{AtomicBool, Ordering};

/// An account backend that never answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StalledAccountStore;

#[async_trait]
impl AccountStore for StalledAccountStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, StoreError> {
        std::future::pending().await
    }

    async fn find_by_id(&self, _id: AccountId) -> Result<Option<Account>, StoreError> {
        std::future::pending().await
    }

    async fn insert(&self, _account: Account) -> Result<(), StoreError> {
        std::future::pending().await
    }
}

/// In-memory accounts whose id lookups can be switched to fail.
#[derive(Default)]
pub struct SwitchableAccountStore {
    inner: InMemoryAccountStore,
    failing: AtomicBool,
}

impl SwitchableAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, `find_by_id` fails with a backend error.
    pub fn fail_lookups(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl AccountStore for SwitchableAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.inner.find_by_email(email).await
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("account replica offline".into()));
        }
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        self.inner.insert(account).await
    }
}
