//! # Outbound Ports
//!
//! Account information the controller needs: the reporter's ward at
//! creation time and summaries for display views.

use async_trait::async_trait;
use shared_types::{AccountId, AccountSummary, CivicError};

/// Account lookup - outbound port.
#[async_trait]
pub trait AccountLookup: Send + Sync {
    /// Public summary of the account, or `None` if it no longer exists.
    async fn summary(&self, id: AccountId) -> Result<Option<AccountSummary>, CivicError>;
}
