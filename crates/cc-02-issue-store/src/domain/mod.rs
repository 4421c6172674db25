//! # Domain Layer
//!
//! Issue record, resolution model, status transitions and query filters.

pub mod entities;
pub mod query;
pub mod transitions;

pub use entities::{Issue, Location, NewIssue, Resolution, ResolutionRecord, StatusChange};
pub use query::{newest_first, IssueFilter, QueryResult};
pub use transitions::{is_allowed, successors, ALLOWED_TRANSITIONS};
