//! Deadline-guarded account store.

use crate::domain::Account;
use crate::ports::AccountStore;
use async_trait::async_trait;
use civic_telemetry::STORE_TIMEOUTS;
use shared_types::{with_deadline, AccountId, StoreError};
use std::future::Future;
use std::time::Duration;

/// Account store decorator that enforces a per-call deadline.
pub struct DeadlineAccountStore<S> {
    inner: S,
    deadline: Duration,
}

impl<S: AccountStore> DeadlineAccountStore<S> {
    pub fn new(inner: S, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    async fn guard<T, F>(&self, operation: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>> + Send,
    {
        let result = with_deadline(operation, self.deadline, fut).await;
        if let Err(StoreError::Timeout { .. }) = &result {
            STORE_TIMEOUTS.with_label_values(&[operation]).inc();
        }
        result
    }
}

#[async_trait]
impl<S: AccountStore> AccountStore for DeadlineAccountStore<S> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.guard("accounts.find_by_email", self.inner.find_by_email(email))
            .await
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        self.guard("accounts.find_by_id", self.inner.find_by_id(id))
            .await
    }

    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        self.guard("accounts.insert", self.inner.insert(account))
            .await
    }
}
