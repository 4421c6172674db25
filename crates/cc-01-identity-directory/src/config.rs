//! Identity directory configuration.

/// Registration code accepted for admin sign-ups unless overridden.
pub const DEFAULT_ADMIN_REGISTRATION_CODE: &str = "ADMIN2024";

/// Well-known administrator created at startup.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@citycare.com";
pub const DEFAULT_ADMIN_NAME: &str = "CityCare Admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Configuration for the identity directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Code an admin registration must present.
    pub admin_registration_code: String,
    /// Email of the bootstrap administrator.
    pub default_admin_email: String,
    /// Display name of the bootstrap administrator.
    pub default_admin_name: String,
    /// Initial password of the bootstrap administrator.
    pub default_admin_password: String,
    /// Minimum password length.
    pub min_password_len: usize,
    /// Argon2 memory cost in KiB.
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    pub hash_iterations: u32,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            admin_registration_code: DEFAULT_ADMIN_REGISTRATION_CODE.to_string(),
            default_admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            default_admin_name: DEFAULT_ADMIN_NAME.to_string(),
            default_admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            min_password_len: MIN_PASSWORD_LEN,
            hash_memory_kib: argon2::Params::DEFAULT_M_COST,
            hash_iterations: argon2::Params::DEFAULT_T_COST,
        }
    }
}

impl IdentityConfig {
    /// Cheap hashing parameters for tests.
    pub fn for_testing() -> Self {
        Self {
            hash_memory_kib: 8,
            hash_iterations: 1,
            ..Self::default()
        }
    }

    /// True while the shipped bootstrap password is still configured.
    pub fn uses_default_admin_password(&self) -> bool {
        self.default_admin_password == DEFAULT_ADMIN_PASSWORD
    }

    /// True while the shipped admin registration code is still configured.
    pub fn uses_default_registration_code(&self) -> bool {
        self.admin_registration_code == DEFAULT_ADMIN_REGISTRATION_CODE
    }
}
