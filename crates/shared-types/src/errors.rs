//! # Error Types
//!
//! Defines the error taxonomy used across subsystems.
//!
//! Every user-visible failure is a `CivicError` and maps to exactly one
//! `ErrorKind`. Kind codes are stable; messages are human-readable and may
//! change.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failures raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend did not answer within the configured deadline.
    #[error("{operation} timed out after {elapsed_ms}ms")]
    Timeout {
        operation: &'static str,
        elapsed_ms: u64,
    },

    /// A unique key constraint rejected the write.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    /// Any other backend failure.
    #[error("backend failure: {0}")]
    Backend(String),
}

/// Errors surfaced by core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CivicError {
    /// Malformed or missing input. The caller must correct and resubmit.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Registration conflict on a unique email.
    #[error("User already exists with email {email}")]
    DuplicateIdentity { email: String },

    /// Policy denial. Never says whether ownership or role caused it.
    #[error("Not authorized to perform this operation")]
    Forbidden,

    /// The requested issue or account does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Email/password pair did not match an account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Storage timed out or failed. Safe to retry with backoff.
    #[error("Storage unavailable: {0}")]
    StoreUnavailable(StoreError),

    /// A server-side fault unrelated to the caller's input.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CivicError {
    pub fn validation(message: impl Into<String>) -> Self {
        CivicError::Validation(message.into())
    }

    pub fn issue_not_found() -> Self {
        CivicError::NotFound { entity: "Issue" }
    }

    pub fn account_not_found() -> Self {
        CivicError::NotFound { entity: "Account" }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CivicError::Internal(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CivicError::Validation(_) => ErrorKind::Validation,
            CivicError::DuplicateIdentity { .. } => ErrorKind::DuplicateIdentity,
            CivicError::Forbidden => ErrorKind::Forbidden,
            CivicError::NotFound { .. } => ErrorKind::NotFound,
            CivicError::InvalidCredentials => ErrorKind::InvalidCredentials,
            CivicError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            CivicError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Only storage failures are transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CivicError::StoreUnavailable(_))
    }
}

impl From<StoreError> for CivicError {
    fn from(err: StoreError) -> Self {
        CivicError::StoreUnavailable(err)
    }
}

/// Stable, machine-readable error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    #[serde(rename = "VALIDATION_ERROR")]
    Validation,
    DuplicateIdentity,
    Forbidden,
    NotFound,
    InvalidCredentials,
    StoreUnavailable,
    #[serde(rename = "INTERNAL_ERROR")]
    Internal,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::DuplicateIdentity => "DUPLICATE_IDENTITY",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorKind::StoreUnavailable => "STORE_UNAVAILABLE",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }

    /// Caller-side mistakes, as opposed to infrastructure failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::StoreUnavailable | ErrorKind::Internal)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
