//! # Error Presentation
//!
//! Maps a `CivicError` to the body an outer surface returns. The kind code
//! is always exact. Server-side detail is replaced with a generic message
//! in production.

use serde::Serialize;
use shared_types::{CivicError, ErrorKind};
use tracing::{error, warn};

const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable, please retry";
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Client-facing error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl ErrorBody {
    /// Conventional HTTP status for the kind.
    pub fn http_status(&self) -> u16 {
        match self.kind {
            ErrorKind::Validation => 400,
            ErrorKind::InvalidCredentials => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::DuplicateIdentity => 409,
            ErrorKind::StoreUnavailable => 503,
            ErrorKind::Internal => 500,
        }
    }
}

/// Logs `err` and builds its client payload.
pub fn present(err: &CivicError, production: bool) -> ErrorBody {
    let kind = err.kind();
    if kind.is_client_error() {
        warn!(kind = %kind, error = %err, "Request rejected");
    } else {
        error!(kind = %kind, error = %err, "Server-side failure");
    }

    let message = match err {
        CivicError::StoreUnavailable(_) if production => UNAVAILABLE_MESSAGE.to_string(),
        CivicError::Internal(_) if production => INTERNAL_MESSAGE.to_string(),
        other => other.to_string(),
    };

    ErrorBody {
        kind,
        message,
        retryable: err.is_retryable(),
    }
}
