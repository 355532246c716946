//! Fenced code blocks delimited by triple backticks.
//!
//! A fence is three backticks, an optional language token, a line break,
//! then everything up to the nearest following three backticks. The body is
//! trimmed, escaped and emitted inside `<pre><code>`.

use super::escape::escape_html;
use super::TextTransform;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```([\w+#.-]*)[ \t]*\n(.*?)```").expect("fence pattern is valid")
});

fn code_block(caps: &Captures) -> String {
    let body = escape_html(caps[2].trim());
    match &caps[1] {
        "" => format!("<pre><code>{body}</code></pre>"),
        language => format!(r#"<pre><code class="language-{language}">{body}</code></pre>"#),
    }
}

pub struct FencedCodeExtractor;

impl TextTransform for FencedCodeExtractor {
    fn apply(&self, text: String) -> String {
        FENCE.replace_all(&text, code_block).into_owned()
    }
}

const MARKER: &str = "mdconv:fence";

/// A placeholder marker that does not occur anywhere in `text`.
fn unused_marker(text: &str) -> String {
    let mut marker = MARKER.to_string();
    while text.contains(&marker) {
        marker.push('~');
    }
    marker
}

/// Rendered code blocks taken out of a document by [`shield`].
///
/// The placeholders left behind contain none of the characters the inline
/// and list passes react to, and a placeholder alone on its line is a
/// raw-HTML line for the paragraph assembler. Their marker never occurs in
/// the source document, so comments written by the author are not mistaken
/// for placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceBlocks {
    marker: String,
    blocks: Vec<String>,
}

impl FenceBlocks {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn placeholder(&self, index: usize) -> String {
        format!("<!--{}:{index}-->", self.marker)
    }

    /// Put the rendered code blocks back in place of their placeholders.
    pub fn restore(&self, html: &str) -> String {
        self.blocks
            .iter()
            .enumerate()
            .fold(html.to_string(), |html, (index, block)| {
                html.replace(&self.placeholder(index), block)
            })
    }
}

/// Render every fence up front and replace it with a placeholder comment.
pub fn shield(text: &str) -> (String, FenceBlocks) {
    let mut fences = FenceBlocks {
        marker: unused_marker(text),
        blocks: Vec::new(),
    };
    let text = FENCE
        .replace_all(text, |caps: &Captures| {
            fences.blocks.push(code_block(caps));
            fences.placeholder(fences.blocks.len() - 1)
        })
        .into_owned();
    (text, fences)
}
