//! Deadline-guarded issue store.
//!
//! Wraps any `IssueRepository` so that no call can hang: each one is raced
//! against the configured store timeout.

use crate::domain::{Issue, IssueFilter, QueryResult};
use crate::ports::IssueRepository;
use async_trait::async_trait;
use civic_telemetry::STORE_TIMEOUTS;
use shared_types::{with_deadline, AccountId, IssueId, StoreError};
use std::future::Future;
use std::time::Duration;

/// Issue store decorator that enforces a per-call deadline.
pub struct DeadlineIssueStore<S> {
    inner: S,
    deadline: Duration,
}

impl<S: IssueRepository> DeadlineIssueStore<S> {
    pub fn new(inner: S, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    pub fn inner(&self) -> &S {
        &self.inner
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
impl<S: IssueRepository> IssueRepository for DeadlineIssueStore<S> {
    async fn insert(&self, issue: Issue) -> Result<(), StoreError> {
        self.guard("issues.insert", self.inner.insert(issue)).await
    }

    async fn get(&self, id: IssueId) -> Result<Option<Issue>, StoreError> {
        self.guard("issues.get", self.inner.get(id)).await
    }

    async fn replace(&self, issue: Issue) -> Result<bool, StoreError> {
        self.guard("issues.replace", self.inner.replace(issue)).await
    }

    async fn remove(&self, id: IssueId) -> Result<bool, StoreError> {
        self.guard("issues.remove", self.inner.remove(id)).await
    }

    async fn query(
        &self,
        filter: &IssueFilter,
        offset: usize,
        limit: usize,
    ) -> Result<QueryResult, StoreError> {
        self.guard("issues.query", self.inner.query(filter, offset, limit))
            .await
    }

    async fn by_reporter(&self, reporter: AccountId) -> Result<Vec<Issue>, StoreError> {
        self.guard("issues.by_reporter", self.inner.by_reporter(reporter))
            .await
    }

    async fn snapshot(&self) -> Result<Vec<Issue>, StoreError> {
        self.guard("issues.snapshot", self.inner.snapshot()).await
    }
}
