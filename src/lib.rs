//! # blockpage
//!
//! Server-rendered block page for a DNS-level ad-blocking appliance.
//!
//! Blocked domains resolve to the appliance's own address, so every HTTP
//! request for a blocked site lands on this service. The requested path's
//! file extension decides what comes back:
//!
//! - **Page-like requests** (`.html`, `.php`, bare directories, the root)
//!   get a full "Website Blocked" notice echoing the blocked host/path and
//!   the installed blocker version.
//! - **Resource requests** (images, scripts, stylesheets, fonts) get a
//!   near-empty placeholder so browsers don't fill blocked pages with
//!   broken-asset icons.
//!
//! ## Architecture
//!
//! - [`classify`] - the extension classification rule
//! - [`sanitize`] - shell-metacharacter stripping for echoed request fields
//! - [`request`] - immutable per-request context built from axum parts
//! - [`version`] - injected version-metadata providers (git, static)
//! - [`handlers`] - the single classifier/renderer handler
//! - [`routes`] / [`server`] - router assembly and runtime setup
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:80"
//! export VERSION_REPO="/etc/.pihole"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod classify;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod routes;
pub mod sanitize;
pub mod server;
pub mod state;
pub mod version;

pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::classify::{Classification, classify};
    pub use crate::request::BlockRequest;
    pub use crate::state::AppState;
    pub use crate::version::{GitVersionProvider, StaticVersionProvider, VersionProvider};
}
