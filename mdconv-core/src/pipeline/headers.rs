//! ATX-style heading lines (`# Title` through `###### Title`).

use super::TextTransform;
use once_cell::sync::Lazy;
use regex::Regex;

/// One anchored pattern per level, ordered from `h6` down to `h1`.
///
/// Each pattern demands an exact hash count followed by inline whitespace,
/// so a deeper heading never satisfies a shallower level's pattern.
static HEADING_PATTERNS: Lazy<Vec<(usize, Regex)>> = Lazy::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let pattern = format!(r"(?m)^#{{{level}}}[^\S\n]+(.+)$");
            let regex = Regex::new(&pattern).expect("heading pattern is valid");
            (level, regex)
        })
        .collect()
});

pub struct HeaderRewriter;

impl TextTransform for HeaderRewriter {
    fn apply(&self, text: String) -> String {
        let mut text = text;
        for (level, pattern) in HEADING_PATTERNS.iter() {
            let replacement = format!("<h{level}>${{1}}</h{level}>");
            text = pattern.replace_all(&text, replacement.as_str()).into_owned();
        }
        text
    }
}
