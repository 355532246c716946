//! Grouping of consecutive list-item lines into `<ul>` / `<ol>` blocks.
//!
//! Two passes, unordered first. Each pass is a fold over the lines with an
//! explicit [`ListState`]:
//!
//! | state            | line      | emit                       | next state       |
//! |------------------|-----------|----------------------------|------------------|
//! | `Outside`        | item      | open tag, `<li>`           | `InList(kind)`   |
//! | `Outside`        | other     | line                       | `Outside`        |
//! | `InList(kind)`   | item      | `<li>`                     | `InList(kind)`   |
//! | `InList(kind)`   | other     | close tag, line            | `Outside`        |
//! | `InList(kind)`   | end       | close tag                  |                  |
//!
//! Items produced by the unordered pass start with `<li>`, which never looks
//! like an ordered marker, so the ordered pass leaves them alone.

use super::lines;
use super::TextTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }

    fn item_text(self, line: &str) -> Option<&str> {
        match self {
            ListKind::Unordered => lines::unordered_item(line),
            ListKind::Ordered => lines::ordered_item(line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Outside,
    InList(ListKind),
}

/// Wrap every run of `kind` item lines in its container tags.
pub fn group(text: &str, kind: ListKind) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut state = ListState::Outside;

    for line in text.split('\n') {
        state = match (state, kind.item_text(line)) {
            (ListState::Outside, Some(item)) => {
                out.push(kind.open_tag().to_string());
                out.push(list_item(item));
                ListState::InList(kind)
            }
            (ListState::InList(open), Some(item)) => {
                out.push(list_item(item));
                ListState::InList(open)
            }
            (ListState::InList(open), None) => {
                out.push(open.close_tag().to_string());
                out.push(line.to_string());
                ListState::Outside
            }
            (ListState::Outside, None) => {
                out.push(line.to_string());
                ListState::Outside
            }
        };
    }

    if let ListState::InList(open) = state {
        out.push(open.close_tag().to_string());
    }

    out.join("\n")
}

fn list_item(text: &str) -> String {
    format!("  <li>{text}</li>")
}

pub struct ListGrouper;

impl TextTransform for ListGrouper {
    fn apply(&self, text: String) -> String {
        let text = group(&text, ListKind::Unordered);
        group(&text, ListKind::Ordered)
    }
}
