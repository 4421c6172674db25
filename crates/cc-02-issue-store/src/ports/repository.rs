//! # Issue Repository Port
//!
//! Persistence contract for issue records. Implementations must never hold a
//! lock across an await point and must return whole records: callers build
//! the complete new record and hand it over in one `replace`.

use crate::domain::{Issue, IssueFilter, QueryResult};
use async_trait::async_trait;
use shared_types::{AccountId, IssueId, StoreError};

/// Issue storage - outbound port of the lifecycle and statistics subsystems.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Persist a new issue.
    async fn insert(&self, issue: Issue) -> Result<(), StoreError>;

    /// Fetch one issue.
    async fn get(&self, id: IssueId) -> Result<Option<Issue>, StoreError>;

    /// Overwrite an existing issue. Returns `false` if it no longer exists.
    async fn replace(&self, issue: Issue) -> Result<bool, StoreError>;

    /// Delete an issue. Returns `false` if it did not exist.
    async fn remove(&self, id: IssueId) -> Result<bool, StoreError>;

    /// Filtered window, newest first, plus the total match count.
    async fn query(
        &self,
        filter: &IssueFilter,
        offset: usize,
        limit: usize,
    ) -> Result<QueryResult, StoreError>;

    /// Every issue filed by `reporter`, newest first.
    async fn by_reporter(&self, reporter: AccountId) -> Result<Vec<Issue>, StoreError>;

    /// All issues as of a single point in time.
    async fn snapshot(&self) -> Result<Vec<Issue>, StoreError>;
}
