//! Inline span substitution: bold, italic, code, links and images.
//!
//! Each span kind is one regex pass over the whole text. Passes run in
//! [`SpanKind::ORDER`] and never recurse into their own replacement text.
//! Span bodies stop at line breaks, so an unmatched delimiter on one line
//! cannot pair with a delimiter further down the document.

use super::TextTransform;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*\n]+?)\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+?)\*").expect("italic pattern"));
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+?)`").expect("code pattern"));
// The optional leading `!` lets the link pass step over image syntax.
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!?)\[([^\]\n]+)\]\(([^)\n]+)\)").expect("link pattern"));
static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]\n]*)\]\(([^)\n]+)\)").expect("image pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Bold must precede italic so `**x**` is never read as two italics.
    pub const ORDER: [SpanKind; 5] = [
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Link,
        SpanKind::Image,
    ];

    /// Replace every non-overlapping span of this kind, left to right.
    pub fn rewrite(self, text: &str) -> Cow<'_, str> {
        match self {
            SpanKind::Bold => BOLD.replace_all(text, "<strong>${1}</strong>"),
            SpanKind::Italic => ITALIC.replace_all(text, "<em>${1}</em>"),
            SpanKind::Code => CODE.replace_all(text, "<code>${1}</code>"),
            SpanKind::Link => LINK.replace_all(text, |caps: &Captures| {
                if &caps[1] == "!" {
                    caps[0].to_string()
                } else {
                    format!(r#"<a href="{}">{}</a>"#, &caps[3], &caps[2])
                }
            }),
            SpanKind::Image => IMAGE.replace_all(text, r#"<img src="${2}" alt="${1}">"#),
        }
    }
}

pub struct InlineSpanRewriter;

impl TextTransform for InlineSpanRewriter {
    fn apply(&self, text: String) -> String {
        SpanKind::ORDER.iter().fold(text, |text, kind| {
            let rewritten = match kind.rewrite(&text) {
                Cow::Owned(rewritten) => Some(rewritten),
                Cow::Borrowed(_) => None,
            };
            rewritten.unwrap_or(text)
        })
    }
}
