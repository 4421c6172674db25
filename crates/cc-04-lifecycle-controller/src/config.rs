//! Lifecycle controller configuration.

/// Page size used when a listing does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page a listing may return.
pub const MAX_PAGE_SIZE: usize = 100;

/// Configuration for issue listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleConfig {
    pub default_page_size: usize,
    /// Larger requested page sizes are clamped to this.
    pub max_page_size: usize,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl LifecycleConfig {
    pub fn for_testing() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 20,
        }
    }
}
