//! # CC-03 Access Policy
//!
//! Role and ownership checks for every issue operation.
//!
//! **Subsystem ID:** 03
//!
//! `authorize` is a pure decision function. `require` wraps it for service
//! code: it turns a denial into `CivicError::Forbidden` and counts it.

#![warn(clippy::all)]

pub mod domain;
mod enforcement;

pub use domain::{authorize, Decision, Operation};
pub use enforcement::{authenticated, require};
