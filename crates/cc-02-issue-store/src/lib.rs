//! # CC-02 Issue Store
//!
//! Persistence of civic issues and their embedded resolution records.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Own the `Issue` record and keep status and resolution consistent
//! - Serve filtered, paginated and per-reporter queries, newest first
//! - Hand out single-point snapshots for aggregation
//!
//! ## Module Structure
//!
//! ```text
//! cc-02-issue-store/
//! ├── domain/      # Issue, Resolution, transitions, filters
//! ├── ports/       # IssueRepository
//! ├── adapters/    # InMemoryIssueStore, DeadlineIssueStore
//! └── test_utils   # Stalled and failing backends
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod test_utils;

pub use adapters::{DeadlineIssueStore, InMemoryIssueStore};
pub use config::{StoreConfig, DEFAULT_STORE_TIMEOUT_MS};
pub use domain::{
    is_allowed, successors, Issue, IssueFilter, Location, NewIssue, QueryResult, Resolution,
    ResolutionRecord, StatusChange, ALLOWED_TRANSITIONS,
};
pub use ports::IssueRepository;
