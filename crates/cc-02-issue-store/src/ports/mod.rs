//! # Ports Layer
//!
//! The storage contract every issue backend implements.

pub mod repository;

pub use repository::IssueRepository;
