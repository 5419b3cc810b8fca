use std::sync::Arc;

use crate::version::VersionProvider;

/// Shared application state injected into the handler.
///
/// Nothing here is mutable; the handler is safe to invoke concurrently from
/// any number of requests.
#[derive(Clone)]
pub struct AppState {
    /// Source of the blocker's release tag for the notice footer.
    pub version: Arc<dyn VersionProvider>,
    /// The appliance's own address, used as the host for admin assets.
    pub server_addr: String,
}
