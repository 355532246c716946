//! Paragraph assembly, the last stage of the pipeline.
//!
//! Consecutive text lines are joined with single spaces into one `<p>`.
//! Blank lines and raw-HTML lines end the current paragraph; raw-HTML lines
//! are emitted unchanged and blank lines are dropped.

use super::lines::{classify, LineKind};
use super::TextTransform;

#[derive(Debug)]
enum ParagraphState<'a> {
    Empty,
    Accumulating(Vec<&'a str>),
}

impl<'a> ParagraphState<'a> {
    fn push(self, line: &'a str) -> Self {
        match self {
            ParagraphState::Empty => ParagraphState::Accumulating(vec![line]),
            ParagraphState::Accumulating(mut lines) => {
                lines.push(line);
                ParagraphState::Accumulating(lines)
            }
        }
    }

    fn flush(self, out: &mut Vec<String>) {
        if let ParagraphState::Accumulating(lines) = self {
            out.push(format!("<p>{}</p>", lines.join(" ")));
        }
    }
}

pub fn assemble(text: &str) -> String {
    let mut out = Vec::new();
    let mut state = ParagraphState::Empty;

    for line in text.split('\n') {
        state = match classify(line) {
            LineKind::Text(content) => state.push(content),
            LineKind::Blank => {
                state.flush(&mut out);
                ParagraphState::Empty
            }
            LineKind::RawHtml => {
                state.flush(&mut out);
                out.push(line.to_string());
                ParagraphState::Empty
            }
        };
    }
    state.flush(&mut out);

    out.join("\n")
}

pub struct ParagraphAssembler;

impl TextTransform for ParagraphAssembler {
    fn apply(&self, text: String) -> String {
        assemble(&text)
    }
}
