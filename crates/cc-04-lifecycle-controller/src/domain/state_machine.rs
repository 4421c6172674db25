//! # Status State Machine
//!
//! Turns a requested target status into a [`StatusChange`] the issue can
//! apply. Entering `resolved` or `closed` captures a fresh resolution record:
//! the resolver, the time, optional notes and an optional "after" image. The
//! "before" image is the issue's first attached image.

use cc_02_issue_store::{is_allowed, Issue, ResolutionRecord, StatusChange};
use shared_types::{AccountId, CivicError, IssueStatus, Timestamp};

/// Builds the change that moves `issue` to `target`.
pub fn plan_transition(
    issue: &Issue,
    target: IssueStatus,
    resolver: AccountId,
    now: Timestamp,
    notes: Option<String>,
    after_image: Option<String>,
) -> Result<StatusChange, CivicError> {
    let from = issue.status();
    if !is_allowed(from, target) {
        return Err(CivicError::validation(format!(
            "Cannot change status from {from} to {target}"
        )));
    }

    let record = || ResolutionRecord {
        resolved_by: resolver,
        resolved_at: now,
        notes: notes.clone().filter(|n| !n.trim().is_empty()),
        before_image: issue.first_image_url().map(str::to_string),
        after_image: after_image.clone().filter(|url| !url.trim().is_empty()),
    };

    match target {
        IssueStatus::InProgress => Ok(StatusChange::InProgress),
        IssueStatus::Resolved => Ok(StatusChange::Resolved(record())),
        IssueStatus::Closed => Ok(StatusChange::Closed(record())),
        // Already rejected by the table.
        IssueStatus::Reported => Err(CivicError::validation(
            "Issues cannot return to reported",
        )),
    }
}
