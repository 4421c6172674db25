//! # Registration
//!
//! Sign-up requests arrive loosely typed (role, ward and admin code are all
//! optional). [`Registration::try_from_request`] turns one into an explicit
//! citizen or admin variant, so later code never sees a citizen without a
//! ward or an admin without a code.

use super::entities::NewAccount;
use serde::{Deserialize, Serialize};
use shared_types::{CivicError, Role, ADMIN_WARD};
use subtle::ConstantTimeEq;

/// Raw sign-up input as submitted by a client.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, alias = "wardNumber")]
    pub ward: Option<String>,
    #[serde(default)]
    pub admin_code: Option<String>,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("ward", &self.ward)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitizenRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub ward: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub admin_code: String,
}

/// A sign-up whose shape matches its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Citizen(CitizenRegistration),
    Admin(AdminRegistration),
}

impl Registration {
    /// Classifies a raw request. A missing role means citizen.
    pub fn try_from_request(request: RegistrationRequest) -> Result<Self, CivicError> {
        let role = match request.role.as_deref().map(str::trim) {
            None | Some("") => Role::Citizen,
            Some(raw) => raw.parse::<Role>().map_err(CivicError::Validation)?,
        };

        match role {
            Role::Citizen => {
                let ward = non_blank(request.ward).ok_or_else(|| {
                    CivicError::validation("Ward number is required for citizen registration")
                })?;
                Ok(Registration::Citizen(CitizenRegistration {
                    name: request.name,
                    email: request.email,
                    password: request.password,
                    ward,
                }))
            }
            Role::Admin => {
                let admin_code = non_blank(request.admin_code).ok_or_else(|| {
                    CivicError::validation("Admin code is required for admin registration")
                })?;
                Ok(Registration::Admin(AdminRegistration {
                    name: request.name,
                    email: request.email,
                    password: request.password,
                    admin_code,
                }))
            }
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Registration::Citizen(_) => Role::Citizen,
            Registration::Admin(_) => Role::Admin,
        }
    }

    /// Account fields for this registration. Admins get the `"All"` ward.
    pub fn into_candidate(self) -> NewAccount {
        match self {
            Registration::Citizen(c) => NewAccount {
                name: c.name,
                email: c.email,
                password: c.password,
                role: Role::Citizen,
                ward: c.ward,
            },
            Registration::Admin(a) => NewAccount {
                name: a.name,
                email: a.email,
                password: a.password,
                role: Role::Admin,
                ward: ADMIN_WARD.to_string(),
            },
        }
    }
}

/// Public registration settings, as shown to sign-up forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPolicy {
    pub admin_registration_enabled: bool,
    pub requires_admin_code: bool,
}

/// Trims and lowercases an email, rejecting anything without a local part
/// and a domain.
pub fn normalize_email(raw: &str) -> Result<String, CivicError> {
    let email = raw.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(CivicError::validation("A valid email address is required")),
    }
}

/// Field checks applied to every new account.
pub fn validate_candidate(candidate: &NewAccount, min_password_len: usize) -> Result<(), CivicError> {
    if candidate.name.trim().is_empty() {
        return Err(CivicError::validation("Name is required"));
    }
    normalize_email(&candidate.email)?;
    if candidate.password.chars().count() < min_password_len {
        return Err(CivicError::validation(format!(
            "Password must be at least {min_password_len} characters"
        )));
    }
    match candidate.role {
        Role::Citizen if candidate.ward.trim().is_empty() => Err(CivicError::validation(
            "Ward number is required for citizen registration",
        )),
        Role::Admin if candidate.ward != ADMIN_WARD => Err(CivicError::validation(format!(
            "Administrator accounts must use the '{ADMIN_WARD}' ward"
        ))),
        _ => Ok(()),
    }
}

/// Compares a supplied admin code with the configured one in constant time.
/// Only the length can leak.
pub fn admin_code_matches(supplied: &str, expected: &str) -> bool {
    supplied.as_bytes().ct_eq(expected.as_bytes()).into()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
