//! Translation of core results for an outer surface.

pub mod errors;

pub use errors::{present, ErrorBody};
