//! In-memory issue store.
//!
//! Each record carries an insertion sequence so issues created within the
//! same millisecond still list in a stable, newest-first order.

use crate::domain::{newest_first, Issue, IssueFilter, QueryResult};
use crate::ports::IssueRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{AccountId, IssueId, StoreError};
use std::collections::HashMap;
use tracing::debug;

struct StoredIssue {
    seq: u64,
    issue: Issue,
}

#[derive(Default)]
struct Inner {
    records: HashMap<IssueId, StoredIssue>,
    next_seq: u64,
}

impl Inner {
    fn sorted<'a>(&'a self, keep: impl Fn(&Issue) -> bool) -> Vec<&'a Issue> {
        let mut hits: Vec<&StoredIssue> =
            self.records.values().filter(|r| keep(&r.issue)).collect();
        hits.sort_by(|a, b| newest_first((&a.issue, a.seq), (&b.issue, b.seq)));
        hits.into_iter().map(|r| &r.issue).collect()
    }
}

/// Issue store backed by a `HashMap` behind a `parking_lot::RwLock`.
#[derive(Default)]
pub struct InMemoryIssueStore {
    inner: RwLock<Inner>,
}

impl InMemoryIssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl IssueRepository for InMemoryIssueStore {
    async fn insert(&self, issue: Issue) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let id = issue.id();
        if inner.records.contains_key(&id) {
            return Err(StoreError::Duplicate(id.to_string()));
        }
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.records.insert(id, StoredIssue { seq, issue });
        debug!(issue_id = %id, seq, "Issue inserted");
        Ok(())
    }

    async fn get(&self, id: IssueId) -> Result<Option<Issue>, StoreError> {
        Ok(self.inner.read().records.get(&id).map(|r| r.issue.clone()))
    }

    async fn replace(&self, issue: Issue) -> Result<bool, StoreError> {
        let mut inner = self.inner.write();
        match inner.records.get_mut(&issue.id()) {
            Some(stored) => {
                stored.issue = issue;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: IssueId) -> Result<bool, StoreError> {
        Ok(self.inner.write().records.remove(&id).is_some())
    }

    async fn query(
        &self,
        filter: &IssueFilter,
        offset: usize,
        limit: usize,
    ) -> Result<QueryResult, StoreError> {
        let inner = self.inner.read();
        let hits = inner.sorted(|issue| filter.matches(issue));
        let total = hits.len();
        let items = hits
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        Ok(QueryResult { items, total })
    }

    async fn by_reporter(&self, reporter: AccountId) -> Result<Vec<Issue>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .sorted(|issue| issue.reported_by() == reporter)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn snapshot(&self) -> Result<Vec<Issue>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.records.values().map(|r| r.issue.clone()).collect())
    }
}
