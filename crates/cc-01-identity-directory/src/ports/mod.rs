//! # Ports Layer
//!
//! - **Inbound**: `IdentityApi`, what the directory offers
//! - **Outbound**: `AccountStore` and `CredentialHasher`, what it needs

pub mod inbound;
pub mod outbound;

pub use inbound::IdentityApi;
pub use outbound::{AccountStore, CredentialHasher};
