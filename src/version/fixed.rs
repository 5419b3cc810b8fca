//! Fixed version provider for tests and checkout-less deployments.

use async_trait::async_trait;

use super::VersionProvider;

/// A provider that always answers with the same, possibly absent, version.
pub struct StaticVersionProvider {
    version: Option<String>,
}

impl StaticVersionProvider {
    /// A provider pinned to a compiled-in or configured version string.
    pub fn pinned(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
        }
    }

    /// A provider with no version; pages render a blank version field.
    pub fn unavailable() -> Self {
        Self { version: None }
    }
}

#[async_trait]
impl VersionProvider for StaticVersionProvider {
    async fn current_version(&self) -> Option<String> {
        self.version.clone()
    }
}
