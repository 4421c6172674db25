//! # Runtime Configuration
//!
//! Aggregate configuration for every subsystem.
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `CC_ADMIN_REGISTRATION_CODE` | `identity.admin_registration_code` |
//! | `CC_DEFAULT_ADMIN_PASSWORD` | `identity.default_admin_password` |
//! | `CC_STORE_TIMEOUT_MS` | `store.store_timeout_ms` |
//! | `CC_MAX_PAGE_SIZE` | `lifecycle.max_page_size` |
//! | `CC_PRODUCTION` | `security.production_mode` |
//!
//! ## Security Requirements
//!
//! In production the shipped admin password and registration code MUST be
//! replaced.

use cc_01_identity_directory::IdentityConfig;
use cc_02_issue_store::StoreConfig;
use cc_04_lifecycle_controller::LifecycleConfig;
use std::str::FromStr;
use thiserror::Error;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub identity: IdentityConfig,
    pub lifecycle: LifecycleConfig,
    pub store: StoreConfig,
    pub security: SecurityConfig,
}

/// Deployment posture.
#[derive(Debug, Clone, Default)]
pub struct SecurityConfig {
    /// Enables production checks and hides internal error detail.
    pub production_mode: bool,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "SECURITY VIOLATION: default admin password in production. \
         Set CC_DEFAULT_ADMIN_PASSWORD."
    )]
    DefaultAdminPassword,

    #[error(
        "SECURITY VIOLATION: default admin registration code in production. \
         Set CC_ADMIN_REGISTRATION_CODE."
    )]
    DefaultRegistrationCode,

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

impl RuntimeConfig {
    /// Defaults overridden by `CC_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(code) = lookup("CC_ADMIN_REGISTRATION_CODE") {
            config.identity.admin_registration_code = code;
        }
        if let Some(password) = lookup("CC_DEFAULT_ADMIN_PASSWORD") {
            config.identity.default_admin_password = password;
        }
        if let Some(raw) = lookup("CC_STORE_TIMEOUT_MS") {
            config.store.store_timeout_ms = parse_positive("CC_STORE_TIMEOUT_MS", raw)?;
        }
        if let Some(raw) = lookup("CC_MAX_PAGE_SIZE") {
            config.lifecycle.max_page_size = parse_positive("CC_MAX_PAGE_SIZE", raw)?;
            config.lifecycle.default_page_size = config
                .lifecycle
                .default_page_size
                .min(config.lifecycle.max_page_size);
        }
        if let Some(raw) = lookup("CC_PRODUCTION") {
            config.security.production_mode = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "CC_PRODUCTION",
                        value: raw,
                    })
                }
            };
        }

        Ok(config)
    }

    /// Rejects shipped credentials.
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        if self.identity.uses_default_admin_password() {
            return Err(ConfigError::DefaultAdminPassword);
        }
        if self.identity.uses_default_registration_code() {
            return Err(ConfigError::DefaultRegistrationCode);
        }
        Ok(())
    }

    /// Cheap hashing and short store deadlines.
    pub fn for_testing() -> Self {
        Self {
            identity: IdentityConfig::for_testing(),
            lifecycle: LifecycleConfig::default(),
            store: StoreConfig::for_testing(),
            security: SecurityConfig::default(),
        }
    }
}

fn parse_positive<T>(var: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::InvalidValue { var, value: raw }),
    }
}
