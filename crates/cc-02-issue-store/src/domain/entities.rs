//! # Issue Entity
//!
//! The persisted issue record and its embedded resolution.
//!
//! `status` and `resolution` are private. They only change together through
//! [`Issue::apply_transition`], so an issue is resolved or closed exactly when
//! it carries a resolution record.

use super::transitions::is_allowed;
use serde::Serialize;
use shared_types::{
    AccountId, CivicError, GeoPoint, ImageRef, IssueCategory, IssueId, IssuePriority, IssueStatus,
    Timestamp,
};

/// Where an issue was observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    /// Copied from the reporter's account at creation.
    #[serde(rename = "wardNumber")]
    pub ward: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoPoint>,
}

/// Details captured when an issue is resolved or closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionRecord {
    pub resolved_by: AccountId,
    pub resolved_at: Timestamp,
    pub notes: Option<String>,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
}

/// Resolution state embedded in an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Resolution {
    #[default]
    NotResolved,
    Resolved(ResolutionRecord),
}

impl Resolution {
    pub fn record(&self) -> Option<&ResolutionRecord> {
        match self {
            Resolution::NotResolved => None,
            Resolution::Resolved(record) => Some(record),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// A status change ready to be applied.
///
/// There is no variant for `reported`: nothing transitions back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    InProgress,
    Resolved(ResolutionRecord),
    Closed(ResolutionRecord),
}

impl StatusChange {
    pub fn target(&self) -> IssueStatus {
        match self {
            StatusChange::InProgress => IssueStatus::InProgress,
            StatusChange::Resolved(_) => IssueStatus::Resolved,
            StatusChange::Closed(_) => IssueStatus::Closed,
        }
    }
}

/// Client-controlled fields of a new issue.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub location: Location,
    pub images: Vec<ImageRef>,
    pub priority: IssuePriority,
}

/// A civic issue reported by a citizen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    id: IssueId,
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub location: Location,
    pub images: Vec<ImageRef>,
    status: IssueStatus,
    pub priority: IssuePriority,
    reported_by: AccountId,
    pub assigned_to: Option<AccountId>,
    resolution: Resolution,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Issue {
    /// Opens a new issue in the `reported` state.
    pub fn report(new: NewIssue, reporter: AccountId, now: Timestamp) -> Self {
        Self {
            id: IssueId::new(),
            title: new.title,
            description: new.description,
            category: new.category,
            location: new.location,
            images: new.images,
            status: IssueStatus::Reported,
            priority: new.priority,
            reported_by: reporter,
            assigned_to: None,
            resolution: Resolution::NotResolved,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> IssueId {
        self.id
    }

    pub fn status(&self) -> IssueStatus {
        self.status
    }

    pub fn reported_by(&self) -> AccountId {
        self.reported_by
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// URL of the first attached image, used as the "before" picture.
    pub fn first_image_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }

    /// Moves the issue to a new status.
    ///
    /// Resolving or closing replaces the resolution record. Moving to
    /// `in-progress` leaves it untouched.
    pub fn apply_transition(&mut self, change: StatusChange, now: Timestamp) -> Result<(), CivicError> {
        let from = self.status;
        let to = change.target();
        if !is_allowed(from, to) {
            return Err(CivicError::validation(format!(
                "Cannot change status from {from} to {to}"
            )));
        }

        match change {
            StatusChange::InProgress => {}
            StatusChange::Resolved(record) | StatusChange::Closed(record) => {
                self.resolution = Resolution::Resolved(record);
            }
        }
        self.status = to;
        self.updated_at = now;
        Ok(())
    }

    pub fn assign(&mut self, assignee: AccountId, now: Timestamp) {
        self.assigned_to = Some(assignee);
        self.updated_at = now;
    }
}
