//! Account records.

use serde::Serialize;
use shared_types::{AccountId, AccountSummary, Actor, Principal, Role, Timestamp};
use std::fmt;

/// Fields of an account before it is stored.
///
/// `password` is plaintext here and is hashed by the directory before the
/// account is built.
#[derive(Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub ward: String,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("ward", &self.ward)
            .finish_non_exhaustive()
    }
}

/// A registered account.
///
/// Role and email are fixed at creation. The password hash is never
/// serialized.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    id: AccountId,
    pub name: String,
    email: String,
    #[serde(skip)]
    password_hash: String,
    role: Role,
    #[serde(rename = "wardNumber")]
    ward: String,
    pub avatar: String,
    created_at: Timestamp,
}

impl Account {
    /// Builds an account from validated fields and an already-computed hash.
    pub(crate) fn from_parts(
        candidate: NewAccount,
        password_hash: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: AccountId::new(),
            name: candidate.name,
            email: candidate.email,
            password_hash,
            role: candidate.role,
            ward: candidate.ward,
            avatar: String::new(),
            created_at,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn ward(&self) -> &str {
        &self.ward
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.role)
    }

    pub fn principal(&self) -> Principal {
        Principal::Authenticated(self.actor())
    }

    pub fn to_summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            ward: self.ward.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("ward", &self.ward)
            .finish_non_exhaustive()
    }
}
