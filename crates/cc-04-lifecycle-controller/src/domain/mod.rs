//! # Domain Layer
//!
//! Client payloads, the status state machine and display views.

pub mod payload;
pub mod state_machine;
pub mod view;

pub use payload::{DraftLocation, IssueDraft, ListQuery, StatusUpdate};
pub use state_machine::plan_transition;
pub use view::{IssuePage, IssueView, ResolutionView};
