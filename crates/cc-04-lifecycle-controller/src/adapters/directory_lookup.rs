//! `AccountLookup` backed by the Identity Directory.

use crate::ports::AccountLookup;
use async_trait::async_trait;
use cc_01_identity_directory::IdentityApi;
use shared_types::{AccountId, AccountSummary, CivicError};
use std::sync::Arc;

pub struct DirectoryAccountLookup {
    directory: Arc<dyn IdentityApi>,
}

impl DirectoryAccountLookup {
    pub fn new(directory: Arc<dyn IdentityApi>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl AccountLookup for DirectoryAccountLookup {
    async fn summary(&self, id: AccountId) -> Result<Option<AccountSummary>, CivicError> {
        Ok(self
            .directory
            .find_by_id(id)
            .await?
            .map(|account| account.to_summary()))
    }
}
