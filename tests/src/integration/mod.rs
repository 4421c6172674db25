//! Cross-subsystem integration tests.

pub mod fixtures;

mod properties;
mod scenarios;
