//! Extension classification: decide whether a request gets the full
//! "Website Blocked" notice or a suppressed placeholder response.

/// File extensions rendered as a full "Website Blocked" page.
///
/// Case-sensitive, exactly as listed: an uppercase `.HTML` request is a
/// resource request as far as this rule is concerned.
pub const WEB_EXTENSIONS: [&str; 6] = ["asp", "htm", "html", "php", "rss", "xml"];

/// Outcome of classifying a requested URI.
///
/// Derived deterministically from the URI's trailing extension and nothing
/// else - never from the method, headers, or body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Render the full block notice.
    ShowNotice,
    /// Return the near-empty placeholder (no notice, no version lookup).
    Suppressed,
}

/// Classifies a sanitized URI by its trailing filename extension.
///
/// A URI with no extension at all (the bare root, a directory-style path,
/// or a path ending in a bare `.`) is page-like and gets the notice.
/// Extensions outside [`WEB_EXTENSIONS`] are resource requests and are
/// suppressed.
pub fn classify(uri: &str) -> Classification {
    match extension(uri) {
        None | Some("") => Classification::ShowNotice,
        Some(ext) if WEB_EXTENSIONS.contains(&ext) => Classification::ShowNotice,
        Some(_) => Classification::Suppressed,
    }
}

/// Extracts the extension of the last path segment: the substring after the
/// last `.`, or `None` when the segment contains no dot.
///
/// Operates on the URI string as-is. A query string is not split off, so
/// `/a.jpg?x=y` has extension `jpg?x=y` - still unrecognized, still
/// suppressed.
fn extension(uri: &str) -> Option<&str> {
    let segment = uri.rsplit('/').next().unwrap_or(uri);
    segment.rsplit_once('.').map(|(_, ext)| ext)
}
