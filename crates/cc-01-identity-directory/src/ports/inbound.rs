//! # Inbound Ports
//!
//! API trait defining what the Identity Directory can do.

use crate::domain::{Account, NewAccount, RegistrationPolicy, RegistrationRequest};
use async_trait::async_trait;
use shared_types::{AccountId, CivicError};

/// Identity Directory API - inbound port.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// Look up an account by email. The email is normalized first.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CivicError>;

    /// Look up an account by id.
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, CivicError>;

    /// Check a plaintext password against the account's stored hash. Runs on
    /// the calling thread.
    fn verify_credential(&self, account: &Account, plaintext: &str) -> bool;

    /// Create an account from explicit fields.
    async fn create(&self, candidate: NewAccount) -> Result<Account, CivicError>;

    /// Register from a raw sign-up request.
    async fn register(&self, request: RegistrationRequest) -> Result<Account, CivicError>;

    /// Resolve an email/password pair to an account.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Account, CivicError>;

    /// Public registration settings.
    fn registration_policy(&self) -> RegistrationPolicy;

    /// Make sure the default administrator exists. Returns `true` if it was
    /// created by this call.
    async fn ensure_default_admin(&self) -> Result<bool, CivicError>;
}
