//! # Inbound Ports
//!
//! API trait defining what the Lifecycle Controller can do.

use crate::domain::{IssueDraft, IssuePage, IssueView, ListQuery, StatusUpdate};
use async_trait::async_trait;
use shared_types::{AccountId, CivicError, IssueId, Principal};

/// Lifecycle Controller API - inbound port.
#[async_trait]
pub trait LifecycleApi: Send + Sync {
    /// Submit a new issue. The ward comes from the reporter's account.
    async fn create_issue(
        &self,
        principal: &Principal,
        draft: IssueDraft,
    ) -> Result<IssueView, CivicError>;

    /// Move an issue to a new status (admin only).
    async fn update_status(
        &self,
        principal: &Principal,
        issue_id: IssueId,
        update: StatusUpdate,
    ) -> Result<IssueView, CivicError>;

    /// Set the assignee of an issue (admin only).
    async fn assign(
        &self,
        principal: &Principal,
        issue_id: IssueId,
        assignee: AccountId,
    ) -> Result<IssueView, CivicError>;

    /// Remove an issue (reporter or admin).
    async fn delete_issue(&self, principal: &Principal, issue_id: IssueId)
        -> Result<(), CivicError>;

    /// Filtered, paginated listing of every issue (admin only).
    async fn list_issues(
        &self,
        principal: &Principal,
        query: ListQuery,
    ) -> Result<IssuePage, CivicError>;

    /// Every issue the caller reported, newest first.
    async fn get_own_issues(&self, principal: &Principal) -> Result<Vec<IssueView>, CivicError>;

    /// One issue, for its reporter or an admin.
    async fn get_issue(&self, principal: &Principal, issue_id: IssueId)
        -> Result<IssueView, CivicError>;
}
