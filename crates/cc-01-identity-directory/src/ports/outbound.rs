//! # Outbound Ports
//!
//! Dependencies of the Identity Directory: account persistence and password
//! hashing.

use crate::domain::Account;
use async_trait::async_trait;
use shared_types::{AccountId, CivicError, StoreError};

/// Account persistence - outbound port.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Exact match on an already-normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError>;

    /// Persist a new account. Fails with `StoreError::Duplicate` if the email
    /// is taken.
    async fn insert(&self, account: Account) -> Result<(), StoreError>;
}

/// One-way salted password hashing - outbound port.
pub trait CredentialHasher: Send + Sync {
    /// Produce a PHC-format hash of `plaintext` with a fresh salt.
    fn hash(&self, plaintext: &str) -> Result<String, CivicError>;

    /// True if `plaintext` matches `hash`. Malformed hashes never match.
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}
