//! # Adapters Layer
//!
//! Implementations of the identity outbound ports.

mod argon2_hasher;
mod deadline;
mod memory;

pub use argon2_hasher::Argon2Hasher;
pub use deadline::DeadlineAccountStore;
pub use memory::InMemoryAccountStore;
