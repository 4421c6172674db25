//! Shared setup for integration tests and benchmarks.

use cc_01_identity_directory::{Account, RegistrationRequest};
use cc_04_lifecycle_controller::{DraftLocation, IssueDraft, IssueView};
use civic_runtime::bootstrap::bootstrap;
use civic_runtime::container::{RuntimeConfig, ServiceContainer};
use shared_types::{CivicError, IssueCategory, IssuePriority, Principal};

pub const TEST_PASSWORD: &str = "s3cret-pass";

/// A wired container with the default admin signed in.
pub struct Harness {
    pub container: ServiceContainer,
    pub admin: Account,
}

impl Harness {
    pub async fn new() -> Result<Self, CivicError> {
        Self::with_config(RuntimeConfig::for_testing()).await
    }

    pub async fn with_config(config: RuntimeConfig) -> Result<Self, CivicError> {
        let container = ServiceContainer::new(config)?;
        bootstrap(&container).await?;
        let admin = container
            .identity
            .authenticate(
                &container.config.identity.default_admin_email,
                &container.config.identity.default_admin_password,
            )
            .await?;
        Ok(Self { container, admin })
    }

    pub fn admin_principal(&self) -> Principal {
        self.admin.principal()
    }

    /// Registers and returns a citizen in `ward`.
    pub async fn citizen(&self, name: &str, ward: &str) -> Result<Account, CivicError> {
        self.container
            .identity
            .register(citizen_request(name, ward))
            .await
    }

    /// Files an issue titled `title` as `reporter`.
    pub async fn report(&self, reporter: &Principal, title: &str) -> Result<IssueView, CivicError> {
        self.container
            .lifecycle
            .create_issue(reporter, draft(title, IssueCategory::Road))
            .await
    }
}

pub fn citizen_request(name: &str, ward: &str) -> RegistrationRequest {
    RegistrationRequest {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: TEST_PASSWORD.to_string(),
        role: None,
        ward: Some(ward.to_string()),
        admin_code: None,
    }
}

pub fn admin_request(name: &str, admin_code: Option<&str>) -> RegistrationRequest {
    RegistrationRequest {
        name: name.to_string(),
        email: format!("{}@citycare.com", name.to_lowercase()),
        password: TEST_PASSWORD.to_string(),
        role: Some("admin".to_string()),
        ward: None,
        admin_code: admin_code.map(str::to_string),
    }
}

pub fn draft(title: &str, category: IssueCategory) -> IssueDraft {
    IssueDraft {
        title: title.to_string(),
        description: format!("{title} needs attention"),
        category: Some(category),
        location: DraftLocation {
            address: "12 Elm St".to_string(),
            ward: None,
            coordinates: None,
        },
        images: Vec::new(),
        priority: Some(IssuePriority::Medium),
    }
}
