//! Test doubles for the issue store.

use crate::domain::{Issue, IssueFilter, QueryResult};
use crate::ports::IssueRepository;
use async_trait::async_trait;
use shared_types::{AccountId, IssueId, StoreError};

/// A backend that never answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StalledIssueStore;

#[async_trait]
impl IssueRepository for StalledIssueStore {
    async fn insert(&self, _issue: Issue) -> Result<(), StoreError> {
        std::future::pending().await
    }

    async fn get(&self, _id: IssueId) -> Result<Option<Issue>, StoreError> {
        std::future::pending().await
    }

    async fn replace(&self, _issue: Issue) -> Result<bool, StoreError> {
        std::future::pending().await
    }

    async fn remove(&self, _id: IssueId) -> Result<bool, StoreError> {
        std::future::pending().await
    }

    async fn query(
        &self,
        _filter: &IssueFilter,
        _offset: usize,
        _limit: usize,
    ) -> Result<QueryResult, StoreError> {
        std::future::pending().await
    }

    async fn by_reporter(&self, _reporter: AccountId) -> Result<Vec<Issue>, StoreError> {
        std::future::pending().await
    }

    async fn snapshot(&self) -> Result<Vec<Issue>, StoreError> {
        std::future::pending().await
    }
}

/// A backend that fails every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingIssueStore;

fn offline<T>() -> Result<T, StoreError> {
    Err(StoreError::Backend("issue store offline".into()))
}

#[async_trait]
impl IssueRepository for FailingIssueStore {
    async fn insert(&self, _issue: Issue) -> Result<(), StoreError> {
        offline()
    }

    async fn get(&self, _id: IssueId) -> Result<Option<Issue>, StoreError> {
        offline()
    }

    async fn replace(&self, _issue: Issue) -> Result<bool, StoreError> {
        offline()
    }

    async fn remove(&self, _id: IssueId) -> Result<bool, StoreError> {
        offline()
    }

    async fn query(
        &self,
        _filter: &IssueFilter,
        _offset: usize,
        _limit: usize,
    ) -> Result<QueryResult, StoreError> {
        offline()
    }

    async fn by_reporter(&self, _reporter: AccountId) -> Result<Vec<Issue>, StoreError> {
        offline()
    }

    async fn snapshot(&self) -> Result<Vec<Issue>, StoreError> {
        offline()
    }
}
