//! Allowed status transitions.
//!
//! ```text
//! reported    -> in-progress | resolved | closed
//! in-progress -> resolved | closed
//! resolved    -> closed
//! closed      (terminal)
//! ```

use shared_types::IssueStatus;

/// Every permitted `(from, to)` pair.
pub const ALLOWED_TRANSITIONS: [(IssueStatus, IssueStatus); 6] = [
    (IssueStatus::Reported, IssueStatus::InProgress),
    (IssueStatus::Reported, IssueStatus::Resolved),
    (IssueStatus::Reported, IssueStatus::Closed),
    (IssueStatus::InProgress, IssueStatus::Resolved),
    (IssueStatus::InProgress, IssueStatus::Closed),
    (IssueStatus::Resolved, IssueStatus::Closed),
];

/// Same-state moves are not in the table and are rejected.
pub fn is_allowed(from: IssueStatus, to: IssueStatus) -> bool {
    ALLOWED_TRANSITIONS.contains(&(from, to))
}

/// Statuses reachable from `from` in one step.
pub fn successors(from: IssueStatus) -> impl Iterator<Item = IssueStatus> {
    ALLOWED_TRANSITIONS
        .into_iter()
        .filter(move |(source, _)| *source == from)
        .map(|(_, target)| target)
}
