//! # Ports Layer
//!
//! - **Inbound**: `LifecycleApi`
//! - **Outbound**: `AccountLookup` (issue storage is `cc_02_issue_store::IssueRepository`)

pub mod inbound;
pub mod outbound;

pub use inbound::LifecycleApi;
pub use outbound::AccountLookup;
