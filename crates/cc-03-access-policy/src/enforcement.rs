//! Enforcement helpers for callers that want a `Result`.

use crate::domain::{authorize, Operation};
use civic_telemetry::ACCESS_DENIED;
use shared_types::{AccountId, Actor, CivicError, Principal};
use tracing::debug;

/// Authorizes the call or fails with `Forbidden`.
///
/// On success returns the acting account, which is always authenticated
/// because every rule denies anonymous callers.
pub fn require(
    principal: &Principal,
    owner: Option<AccountId>,
    operation: Operation,
) -> Result<Actor, CivicError> {
    match (authorize(principal, owner, operation).is_allowed(), principal.actor()) {
        (true, Some(actor)) => Ok(*actor),
        _ => {
            ACCESS_DENIED.with_label_values(&[operation.as_str()]).inc();
            debug!(operation = %operation, "Access denied");
            Err(CivicError::Forbidden)
        }
    }
}

/// Fails with `Forbidden` unless the caller is signed in.
///
/// For operations whose real check needs a resource that has not been
/// loaded yet.
pub fn authenticated(principal: &Principal) -> Result<Actor, CivicError> {
    principal.actor().copied().ok_or_else(|| {
        ACCESS_DENIED.with_label_values(&["authenticate"]).inc();
        CivicError::Forbidden
    })
}
