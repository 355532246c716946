//! HTML escaping for text that must appear literally inside markup.

/// Escape the five HTML-significant characters.
///
/// Ampersands are replaced first so the entities introduced by the later
/// replacements are not escaped a second time.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
