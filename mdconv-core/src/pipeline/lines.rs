//! Stage-local line classification.
//!
//! Every line-scanning stage classifies lines on its own; nothing computed
//! here is carried from one stage to the next.

/// How the paragraph assembler sees a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// Trimmed content starts with `<` and ends with `>`.
    RawHtml,
    /// Anything else, carrying the trimmed content.
    Text(&'a str),
}

pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if is_raw_html(trimmed) {
        LineKind::RawHtml
    } else {
        LineKind::Text(trimmed)
    }
}

fn is_raw_html(trimmed: &str) -> bool {
    trimmed.starts_with('<') && trimmed.ends_with('>')
}

/// Item text of an unordered list line (`- item` or `* item`).
///
/// Only the marker and the single space after it are removed; further
/// spaces stay part of the item text.
pub fn unordered_item(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

/// Item text of an ordered list line (`12. item`).
///
/// Only ASCII digits count as the numeric prefix, and at least one space
/// must follow the dot.
pub fn ordered_item(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = trimmed[digits..].strip_prefix('.')?;
    if !rest.starts_with(' ') {
        return None;
    }
    Some(rest.trim_start_matches(' '))
}
