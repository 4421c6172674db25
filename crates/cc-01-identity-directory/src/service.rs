//! # Identity Directory Service
//!
//! Implements `IdentityApi` on top of an `AccountStore` and a
//! `CredentialHasher`.

use crate::config::IdentityConfig;
use crate::domain::{
    admin_code_matches, normalize_email, validate_candidate, Account, NewAccount, Registration, RegistrationPolicy,
    RegistrationRequest,
};
use crate::ports::{AccountStore, CredentialHasher, IdentityApi};
use async_trait::async_trait;
use civic_telemetry::{log_account_event, ACCOUNTS_REGISTERED};
use shared_types::{AccountId, CivicError, Role, StoreError, TimeSource, ADMIN_WARD};
use std::sync::Arc;
use tracing::{debug, info};

const COMPONENT: &str = "identity";

/// Account registry and credential checker.
pub struct IdentityDirectory {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn CredentialHasher>,
    time: Arc<dyn TimeSource>,
    config: IdentityConfig,
}

impl IdentityDirectory {
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: Arc<dyn CredentialHasher>,
        time: Arc<dyn TimeSource>,
        config: IdentityConfig,
    ) -> Self {
        Self {
            store,
            hasher,
            time,
            config,
        }
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    /// Argon2 runs on the blocking pool.
    async fn hash_password(&self, plaintext: String) -> Result<String, CivicError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| CivicError::internal(format!("hashing task failed: {e}")))?
    }

    async fn verify_password(&self, plaintext: &str, hash: &str) -> Result<bool, CivicError> {
        let hasher = Arc::clone(&self.hasher);
        let (plaintext, hash) = (plaintext.to_string(), hash.to_string());
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hash))
            .await
            .map_err(|e| CivicError::internal(format!("verification task failed: {e}")))
    }

    async fn ensure_email_free(&self, email: &str) -> Result<(), CivicError> {
        match self.store.find_by_email(email).await? {
            Some(_) => Err(CivicError::DuplicateIdentity {
                email: email.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityApi for IdentityDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CivicError> {
        let Ok(email) = normalize_email(email) else {
            return Ok(None);
        };
        Ok(self.store.find_by_email(&email).await?)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, CivicError> {
        Ok(self.store.find_by_id(id).await?)
    }

    fn verify_credential(&self, account: &Account, plaintext: &str) -> bool {
        self.hasher.verify(plaintext, account.password_hash())
    }

    async fn create(&self, mut candidate: NewAccount) -> Result<Account, CivicError> {
        candidate.email = normalize_email(&candidate.email)?;
        candidate.name = candidate.name.trim().to_string();
        validate_candidate(&candidate, self.config.min_password_len)?;
        self.ensure_email_free(&candidate.email).await?;

        let password_hash = self.hash_password(candidate.password.clone()).await?;
        let account = Account::from_parts(candidate, password_hash, self.time.now());

        match self.store.insert(account.clone()).await {
            Ok(()) => {}
            Err(StoreError::Duplicate(email)) => {
                return Err(CivicError::DuplicateIdentity { email });
            }
            Err(e) => return Err(e.into()),
        }

        ACCOUNTS_REGISTERED
            .with_label_values(&[account.role().as_str()])
            .inc();
        log_account_event!(
            info,
            COMPONENT,
            "Account created",
            account.id(),
            role = %account.role(),
            ward = %account.ward()
        );
        Ok(account)
    }

    async fn register(&self, request: RegistrationRequest) -> Result<Account, CivicError> {
        let email = normalize_email(&request.email)?;
        self.ensure_email_free(&email).await?;

        let registration = Registration::try_from_request(request)?;
        if let Registration::Admin(admin) = &registration {
            if !admin_code_matches(&admin.admin_code, &self.config.admin_registration_code) {
                debug!(component = COMPONENT, "Admin registration with wrong code");
                return Err(CivicError::Forbidden);
            }
        }

        self.create(registration.into_candidate()).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Account, CivicError> {
        let account = self
            .find_by_email(email)
            .await?
            .ok_or(CivicError::InvalidCredentials)?;

        if self.verify_password(password, account.password_hash()).await? {
            log_account_event!(debug, COMPONENT, "Credential accepted", account.id());
            Ok(account)
        } else {
            Err(CivicError::InvalidCredentials)
        }
    }

    fn registration_policy(&self) -> RegistrationPolicy {
        RegistrationPolicy {
            admin_registration_enabled: true,
            requires_admin_code: true,
        }
    }

    async fn ensure_default_admin(&self) -> Result<bool, CivicError> {
        let email = normalize_email(&self.config.default_admin_email)?;
        if self.store.find_by_email(&email).await?.is_some() {
            info!(component = COMPONENT, email = %email, "Admin user already exists");
            return Ok(false);
        }

        let candidate = NewAccount {
            name: self.config.default_admin_name.clone(),
            email,
            password: self.config.default_admin_password.clone(),
            role: Role::Admin,
            ward: ADMIN_WARD.to_string(),
        };
        match self.create(candidate).await {
            Ok(admin) => {
                log_account_event!(info, COMPONENT, "Default admin created", admin.id());
                Ok(true)
            }
            // Another bootstrap won the race.
            Err(CivicError::DuplicateIdentity { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
