//! # Core Domain Entities
//!
//! Enumerations and small value types that every subsystem agrees on.
//!
//! ## Clusters
//!
//! - **Identity**: `Role`, `Actor`, `Principal`, `AccountSummary`
//! - **Issue classification**: `IssueStatus`, `IssueCategory`, `IssuePriority`
//! - **Blob references**: `ImageRef`, `GeoPoint`
//!
//! Wire spellings follow the persisted record shapes (`"in-progress"`,
//! `"Road"`, `"citizen"`).

use crate::ids::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ward sentinel stored on administrator accounts.
pub const ADMIN_WARD: &str = "All";

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Citizen,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "citizen" => Ok(Role::Citizen),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// An authenticated caller: who they are and what role they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    pub id: AccountId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: AccountId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// The caller of a core operation as established by the credential service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principal {
    /// No valid credential was presented.
    Anonymous,
    /// A verified account.
    Authenticated(Actor),
}

impl Principal {
    pub fn authenticated(id: AccountId, role: Role) -> Self {
        Principal::Authenticated(Actor::new(id, role))
    }

    pub fn actor(&self) -> Option<&Actor> {
        match self {
            Principal::Anonymous => None,
            Principal::Authenticated(actor) => Some(actor),
        }
    }
}

impl From<Actor> for Principal {
    fn from(actor: Actor) -> Self {
        Principal::Authenticated(actor)
    }
}

/// Public projection of an account, used when expanding references in views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub ward: String,
    pub avatar: String,
}

// =============================================================================
// CLUSTER B: ISSUE CLASSIFICATION
// =============================================================================

/// Issue lifecycle status.
///
/// ```text
/// [reported] ──→ [in-progress] ──→ [resolved] ──→ [closed]
/// ```
///
/// Steps may be skipped forward; nothing moves backward. The allowed pairs
/// live with the issue record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    #[default]
    Reported,
    InProgress,
    Resolved,
    Closed,
}

impl IssueStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [IssueStatus; 4] = [
        IssueStatus::Reported,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Closed,
    ];

    /// Statuses that carry a resolution record.
    pub fn is_settled(&self) -> bool {
        matches!(self, IssueStatus::Resolved | IssueStatus::Closed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Reported => "reported",
            IssueStatus::InProgress => "in-progress",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status '{s}'"))
    }
}

/// Issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IssueCategory {
    Road,
    Water,
    Electricity,
    Garbage,
    Sanitation,
    Other,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 6] = [
        IssueCategory::Road,
        IssueCategory::Water,
        IssueCategory::Electricity,
        IssueCategory::Garbage,
        IssueCategory::Sanitation,
        IssueCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Road => "Road",
            IssueCategory::Water => "Water",
            IssueCategory::Electricity => "Electricity",
            IssueCategory::Garbage => "Garbage",
            IssueCategory::Sanitation => "Sanitation",
            IssueCategory::Other => "Other",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Issue priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl IssuePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::Low => "low",
            IssuePriority::Medium => "medium",
            IssuePriority::High => "high",
            IssuePriority::Critical => "critical",
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// CLUSTER C: BLOB REFERENCES
// =============================================================================

/// Opaque reference to an image held by the blob-storage service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub url: String,
    pub public_id: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: public_id.into(),
        }
    }
}

/// Geographic coordinates of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}
