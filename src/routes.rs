//! Router configuration.
//!
//! The service is the handler for every path and method on its virtual
//! host: a blocked domain resolves here, and whatever the browser asks for
//! must get an answer. A single fallback route covers everything; there are
//! no other endpoints.

use axum::Router;

use crate::handlers::block_page_handler;
use crate::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router.
///
/// # Arguments
///
/// - `state` - shared application state injected into the handler
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(block_page_handler)
        .with_state(state)
        .layer(tracing::layer())
}
