//! Operations subject to authorization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every gated operation of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    ReadOwn,
    ReadAny,
    ListAny,
    UpdateStatus,
    Assign,
    Delete,
    ViewStats,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Create,
        Operation::ReadOwn,
        Operation::ReadAny,
        Operation::ListAny,
        Operation::UpdateStatus,
        Operation::Assign,
        Operation::Delete,
        Operation::ViewStats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::ReadOwn => "readOwn",
            Operation::ReadAny => "readAny",
            Operation::ListAny => "listAny",
            Operation::UpdateStatus => "updateStatus",
            Operation::Assign => "assign",
            Operation::Delete => "delete",
            Operation::ViewStats => "viewStats",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a policy check. A denial carries no reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

impl From<bool> for Decision {
    fn from(allowed: bool) -> Self {
        if allowed {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }
}
