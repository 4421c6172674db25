//! # Domain Layer
//!
//! Operations, decisions and the authorization rules.

pub mod operation;
pub mod rules;

pub use operation::{Decision, Operation};
pub use rules::authorize;
