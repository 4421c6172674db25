//! # Aggregation
//!
//! Pure counting over one snapshot of issues. Because every count comes from
//! the same slice, the totals of each grouping always agree.

use cc_02_issue_store::Issue;
use serde::Serialize;
use shared_types::{IssueCategory, IssueStatus};
use std::collections::BTreeMap;

/// Dashboard counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStats {
    pub total: usize,
    /// Every status, including those with no issues.
    pub count_by_status: BTreeMap<IssueStatus, usize>,
    /// Only categories that occur.
    pub count_by_category: BTreeMap<IssueCategory, usize>,
    /// Only wards that occur.
    pub count_by_ward: BTreeMap<String, usize>,
}

impl IssueStats {
    pub fn status_count(&self, status: IssueStatus) -> usize {
        self.count_by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Counts `issues` by status, category and ward.
pub fn aggregate(issues: &[Issue]) -> IssueStats {
    let mut stats = IssueStats {
        total: issues.len(),
        count_by_status: IssueStatus::ALL.into_iter().map(|s| (s, 0)).collect(),
        ..Default::default()
    };

    for issue in issues {
        *stats.count_by_status.entry(issue.status()).or_default() += 1;
        *stats.count_by_category.entry(issue.category).or_default() += 1;
        *stats
            .count_by_ward
            .entry(issue.location.ward.clone())
            .or_default() += 1;
    }
    stats
}
