//! # CityCare Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/              # Criterion benchmarks
//! └── src/integration/
//!     ├── fixtures.rs       # Container and account helpers
//!     ├── scenarios.rs      # End-to-end lifecycle and registration flows
//!     └── properties.rs     # Randomized cross-crate invariants
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cc-tests
//! cargo test -p cc-tests integration::scenarios
//! cargo bench -p cc-tests
//! ```

pub mod integration;
