//! Statistics service.

use crate::domain::{aggregate, IssueStats};
use async_trait::async_trait;
use cc_02_issue_store::IssueRepository;
use cc_03_access_policy::{require, Operation};
use shared_types::{CivicError, Principal};
use std::sync::Arc;
use tracing::debug;

/// Statistics API - inbound port.
#[async_trait]
pub trait StatisticsApi: Send + Sync {
    /// Counts over one snapshot of all issues (admin only).
    async fn compute_stats(&self, principal: &Principal) -> Result<IssueStats, CivicError>;
}

/// Read-only aggregator over the issue store.
pub struct StatisticsAggregator {
    issues: Arc<dyn IssueRepository>,
}

impl StatisticsAggregator {
    pub fn new(issues: Arc<dyn IssueRepository>) -> Self {
        Self { issues }
    }
}

#[async_trait]
impl StatisticsApi for StatisticsAggregator {
    async fn compute_stats(&self, principal: &Principal) -> Result<IssueStats, CivicError> {
        require(principal, None, Operation::ViewStats)?;
        let snapshot = self.issues.snapshot().await?;
        let stats = aggregate(&snapshot);
        debug!(component = "statistics", total = stats.total, "Statistics computed");
        Ok(stats)
    }
}
