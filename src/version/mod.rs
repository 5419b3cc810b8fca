//! Version-metadata providers.
//!
//! The block notice footer reports the installed blocker version. The
//! lookup sits behind [`VersionProvider`] so the renderer never knows where
//! the version comes from: a git checkout in production, a pinned string in
//! tests or on appliances without one.

use async_trait::async_trait;

mod fixed;
mod git;

pub use fixed::StaticVersionProvider;
pub use git::{GitVersionProvider, VersionLookupError};

/// Source of the installed blocking software's release identifier.
///
/// A provider that cannot produce a version returns `None`; the rendered
/// page degrades to a blank version field. Implementations must never make
/// the lookup a fatal error.
///
/// # Implementations
///
/// - [`GitVersionProvider`] - queries a local git checkout
/// - [`StaticVersionProvider`] - pinned or absent version
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VersionProvider: Send + Sync {
    /// Returns the most recent release tag, or `None` when unavailable.
    async fn current_version(&self) -> Option<String>;
}
