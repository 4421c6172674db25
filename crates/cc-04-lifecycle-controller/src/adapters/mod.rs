//! # Adapters Layer

mod directory_lookup;

pub use directory_lookup::DirectoryAccountLookup;
