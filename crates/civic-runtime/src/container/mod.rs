//! Dependency wiring.

pub mod config;
pub mod services;

pub use config::{ConfigError, RuntimeConfig, SecurityConfig};
pub use services::ServiceContainer;
