//! # CC-05 Statistics
//!
//! Admin dashboard counts: total issues, per status (zero-filled), per
//! category and per ward.
//!
//! **Subsystem ID:** 05
//!
//! Each result is computed from a single store snapshot, so within one
//! result `total` equals the sum of every grouping. Two calls made while
//! issues are being written may disagree with each other.

#![warn(clippy::all)]

pub mod domain;
pub mod service;

pub use domain::{aggregate, IssueStats};
pub use service::{StatisticsAggregator, StatisticsApi};
