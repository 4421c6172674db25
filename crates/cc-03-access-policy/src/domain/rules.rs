//! # Authorization Rules
//!
//! | Operation | Allowed for |
//! |-----------|-------------|
//! | create | any authenticated actor |
//! | readOwn | the issue's reporter |
//! | readAny, listAny, updateStatus, assign, viewStats | admin |
//! | delete | the issue's reporter or an admin |
//!
//! Anonymous callers are denied everything. The function is pure: no I/O,
//! no clock, no randomness.

use super::operation::{Decision, Operation};
use shared_types::{AccountId, Principal};

/// Decides whether `principal` may perform `operation` on a resource owned
/// by `owner` (the issue's reporter, when there is one).
pub fn authorize(principal: &Principal, owner: Option<AccountId>, operation: Operation) -> Decision {
    let Some(actor) = principal.actor() else {
        return Decision::Deny;
    };
    let is_owner = owner == Some(actor.id);

    let allowed = match operation {
        Operation::Create => true,
        Operation::ReadOwn => is_owner,
        Operation::ReadAny
        | Operation::ListAny
        | Operation::UpdateStatus
        | Operation::Assign
        | Operation::ViewStats => actor.is_admin(),
        Operation::Delete => is_owner || actor.is_admin(),
    };
    Decision::from(allowed)
}
