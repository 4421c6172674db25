//! # Domain Layer
//!
//! Accounts and registration rules.

pub mod entities;
pub mod registration;

pub use entities::{Account, NewAccount};
pub use registration::{
    admin_code_matches, normalize_email, validate_candidate, AdminRegistration,
    CitizenRegistration, Registration, RegistrationPolicy, RegistrationRequest,
};
