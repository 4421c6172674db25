//! Query filters and result ordering.

use super::entities::Issue;
use serde::{Deserialize, Serialize};
use shared_types::{IssueCategory, IssuePriority, IssueStatus};
use std::cmp::Ordering;

/// Conjunctive filter. An absent field matches every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFilter {
    pub status: Option<IssueStatus>,
    pub category: Option<IssueCategory>,
    pub priority: Option<IssuePriority>,
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        self.status.map_or(true, |s| issue.status() == s)
            && self.category.map_or(true, |c| issue.category == c)
            && self.priority.map_or(true, |p| issue.priority == p)
    }
}

/// One window of a filtered query.
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    pub items: Vec<Issue>,
    /// Matches across all windows.
    pub total: usize,
}

/// Newest first; among equal creation times the later insertion wins.
pub fn newest_first(a: (&Issue, u64), b: (&Issue, u64)) -> Ordering {
    b.0.created_at()
        .cmp(&a.0.created_at())
        .then_with(|| b.1.cmp(&a.1))
}
