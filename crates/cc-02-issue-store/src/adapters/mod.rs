//! # Adapters Layer
//!
//! Implementations of the `IssueRepository` port.

mod deadline;
mod memory;

pub use deadline::DeadlineIssueStore;
pub use memory::InMemoryIssueStore;
