//! # Shared Types Crate
//!
//! Identifiers, enums and the error taxonomy shared by all CityCare
//! subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a crate boundary is
//!   defined here.
//! - **Stable Error Kinds**: every failure surfaced to a caller maps to one
//!   `ErrorKind` with a fixed wire code.
//! - **Deterministic Time**: subsystems read the clock through `TimeSource`
//!   so tests can pin it.

pub mod deadline;
pub mod entities;
pub mod errors;
pub mod ids;
pub mod time;

pub use deadline::with_deadline;
pub use entities::*;
pub use errors::*;
pub use ids::{AccountId, IssueId};
pub use time::{ManualTimeSource, SystemTimeSource, TimeSource, Timestamp};
