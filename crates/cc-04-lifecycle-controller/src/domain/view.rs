//! Display views.
//!
//! An `IssueView` is an issue with its account references expanded to
//! summaries and timestamps rendered as RFC 3339. A reference to an account
//! that no longer exists renders as `None`; the raw id stays available.

use cc_02_issue_store::{Issue, Location};
use serde::Serialize;
use shared_types::time::to_rfc3339;
use shared_types::{
    AccountId, AccountSummary, ImageRef, IssueCategory, IssueId, IssuePriority, IssueStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionView {
    pub resolver_id: AccountId,
    pub resolved_by: Option<AccountSummary>,
    pub resolved_at: String,
    pub notes: Option<String>,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueView {
    pub id: IssueId,
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub location: Location,
    pub images: Vec<ImageRef>,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub reporter_id: AccountId,
    pub reported_by: Option<AccountSummary>,
    pub assigned_to: Option<AccountSummary>,
    #[serde(rename = "resolutionDetails")]
    pub resolution: Option<ResolutionView>,
    pub created_at: String,
    pub updated_at: String,
}

impl IssueView {
    /// Assembles a view from an issue and the summaries `lookup` resolves.
    pub fn build(issue: Issue, lookup: impl Fn(AccountId) -> Option<AccountSummary>) -> Self {
        let resolution = issue.resolution().record().map(|record| ResolutionView {
            resolver_id: record.resolved_by,
            resolved_by: lookup(record.resolved_by),
            resolved_at: to_rfc3339(record.resolved_at),
            notes: record.notes.clone(),
            before_image: record.before_image.clone(),
            after_image: record.after_image.clone(),
        });

        Self {
            id: issue.id(),
            status: issue.status(),
            reporter_id: issue.reported_by(),
            reported_by: lookup(issue.reported_by()),
            assigned_to: issue.assigned_to.and_then(&lookup),
            resolution,
            created_at: to_rfc3339(issue.created_at()),
            updated_at: to_rfc3339(issue.updated_at()),
            title: issue.title,
            description: issue.description,
            category: issue.category,
            location: issue.location,
            images: issue.images,
            priority: issue.priority,
        }
    }
}

/// One page of an issue listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePage {
    #[serde(rename = "issues")]
    pub items: Vec<IssueView>,
    pub total_pages: usize,
    pub current_page: usize,
    pub total: usize,
}
