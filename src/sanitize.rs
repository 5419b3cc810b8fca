//! Shell-metacharacter stripping for echoed request fields.

/// Characters a command shell assigns meaning to: quoting, substitution,
/// pipes, redirection, globbing, and grouping. Everything here is removed
/// outright.
const SHELL_METACHARACTERS: &[char] = &[
    '#', '&', ';', '`', '|', '*', '?', '~', '<', '>', '^', '(', ')', '[', ']', '{', '}', '$', '\\',
    '\'', '"',
];

/// Strips shell metacharacters and control characters from a request field.
///
/// Defense in depth, not a parser: the request never reaches a subprocess in
/// this service (the version lookup runs with fixed arguments), and rendered
/// output is HTML-escaped by the template engine on top of this. Exotic URIs
/// lose those characters from their displayed form, which is acceptable for
/// a page whose job is to identify a blocked host.
///
/// Total over all inputs; the worst case is an empty string.
pub fn strip_shell_metacharacters(input: &str) -> String {
    input
        .chars()
        .filter(|c| !SHELL_METACHARACTERS.contains(c) && !c.is_control())
        .collect()
}
