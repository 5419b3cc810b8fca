//! The request classifier and block page renderer.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::http::{HeaderMap, Uri};
use axum::response::{IntoResponse, Response};
use chrono::Local;

use crate::classify::{Classification, classify};
use crate::request::BlockRequest;
use crate::state::AppState;

/// Template for the full "Website Blocked" notice.
///
/// Renders `templates/blocked.html`. All interpolated fields are
/// HTML-escaped by askama, so hostile markup in the echoed host or path
/// cannot execute in the rendered page.
#[derive(Template, WebTemplate)]
#[template(path = "blocked.html")]
struct BlockedTemplate {
    server_name: String,
    display_uri: String,
    server_addr: String,
    version: String,
    generated_at: String,
}

/// Template for suppressed resource requests.
///
/// Renders `templates/suppressed.html`: a self-closing window script and an
/// inlined 1x1 transparent GIF, so blocked images and scripts don't litter
/// pages with broken placeholders.
#[derive(Template, WebTemplate)]
#[template(path = "suppressed.html")]
struct SuppressedTemplate {}

/// Serves the block page for every path and method on the virtual host.
///
/// # Endpoint
///
/// Fallback route - any method, any path. Both branches answer `200 OK`
/// with `text/html`; hostile or malformed input degrades to one of the two
/// branches, never to a 4xx/5xx.
///
/// # Branches
///
/// - **Suppressed** (resource-like extension): placeholder body only. The
///   version lookup is skipped entirely.
/// - **ShowNotice** (page-like or no extension): looks up the blocker
///   version (blank field on failure) and renders the full notice.
pub async fn block_page_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let request = BlockRequest::from_parts(&uri, &headers, &state.server_addr);

    match classify(&request.uri) {
        Classification::Suppressed => SuppressedTemplate {}.into_response(),
        Classification::ShowNotice => {
            let version = state.version.current_version().await.unwrap_or_default();

            BlockedTemplate {
                display_uri: request.display_uri().to_string(),
                server_name: request.server_name,
                server_addr: request.server_addr,
                version,
                generated_at: Local::now().format("%a %-I:%M %p, %b %d").to_string(),
            }
            .into_response()
        }
    }
}
