//! Startup tasks run before the runtime accepts work.

use crate::container::ServiceContainer;
use shared_types::CivicError;
use tracing::{info, warn};

/// What bootstrap did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub admin_created: bool,
}

/// Guarantees the default administrator exists.
pub async fn bootstrap(container: &ServiceContainer) -> Result<BootstrapReport, CivicError> {
    let admin_created = container.identity.ensure_default_admin().await?;

    if container.config.identity.uses_default_admin_password() {
        warn!(
            email = %container.config.identity.default_admin_email,
            "Default admin uses the shipped password; change it before exposing the service"
        );
    }
    info!(admin_created, "Bootstrap complete");

    Ok(BootstrapReport { admin_created })
}
