//! # CC-01 Identity Directory
//!
//! Accounts, registration and credential verification for CityCare.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Register citizens (ward required) and administrators (registration
//!   code required)
//! - Verify email/password pairs against Argon2id hashes
//! - Guarantee the default administrator exists at startup
//!
//! ## Module Structure
//!
//! ```text
//! cc-01-identity-directory/
//! ├── domain/      # Account, Registration variants, email rules
//! ├── ports/       # IdentityApi (in), AccountStore + CredentialHasher (out)
//! ├── adapters/    # InMemoryAccountStore, Argon2Hasher, DeadlineAccountStore
//! └── service.rs   # IdentityDirectory
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod test_utils;

pub use adapters::{Argon2Hasher, DeadlineAccountStore, InMemoryAccountStore};
pub use config::{
    IdentityConfig, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD,
    DEFAULT_ADMIN_REGISTRATION_CODE, MIN_PASSWORD_LEN,
};
pub use domain::{
    normalize_email, Account, AdminRegistration, CitizenRegistration, NewAccount, Registration,
    RegistrationPolicy, RegistrationRequest,
};
pub use ports::{AccountStore, CredentialHasher, IdentityApi};
pub use service::IdentityDirectory;
