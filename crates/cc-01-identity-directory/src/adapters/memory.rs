//! In-memory account store.

use crate::domain::Account;
use crate::ports::AccountStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{AccountId, StoreError};
use std::collections::HashMap;

#[derive(Default)]
struct Inner {
    accounts: HashMap<AccountId, Account>,
    by_email: HashMap<String, AccountId>,
}

/// Account store with a unique email index, guarded by one `RwLock`.
#[derive(Default)]
pub struct InMemoryAccountStore {
    inner: RwLock<Inner>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .by_email
            .get(email)
            .and_then(|id| inner.accounts.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.inner.read().accounts.get(&id).cloned())
    }

    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        if inner.by_email.contains_key(account.email()) {
            return Err(StoreError::Duplicate(account.email().to_string()));
        }
        inner.by_email.insert(account.email().to_string(), account.id());
        inner.accounts.insert(account.id(), account);
        Ok(())
    }
}
