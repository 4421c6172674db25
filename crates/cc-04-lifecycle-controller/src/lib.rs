//! # CC-04 Lifecycle Controller
//!
//! Drives issues from report to closure.
//!
//! **Subsystem ID:** 04
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Status Machine
//!
//! ```text
//! reported    ──→ in-progress | resolved | closed
//! in-progress ──→ resolved | closed
//! resolved    ──→ closed
//! ```
//!
//! Entering `resolved` or `closed` attaches a resolution record. Nothing
//! returns to `reported`.
//!
//! ## Operations
//!
//! | Operation | Allowed for |
//! |-----------|-------------|
//! | `create_issue`, `get_own_issues` | any signed-in account |
//! | `get_issue`, `delete_issue` | reporter or admin |
//! | `list_issues`, `update_status`, `assign` | admin |

#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod test_utils;

pub use adapters::DirectoryAccountLookup;
pub use config::{LifecycleConfig, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use domain::{
    plan_transition, DraftLocation, IssueDraft, IssuePage, IssueView, ListQuery, ResolutionView,
    StatusUpdate,
};
pub use ports::{AccountLookup, LifecycleApi};
pub use service::LifecycleController;
