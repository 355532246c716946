//! Standalone document shell around a rendered fragment.

use crate::pipeline::escape::escape_html;
use once_cell::sync::Lazy;
use regex::Regex;

const BASELINE_CSS: &str = include_str!("../../../css/baseline.css");
const FALLBACK_TITLE: &str = "Document";

static FIRST_H1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<h1>(.*?)</h1>").expect("h1 pattern is valid"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Available CSS themes for the document shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HtmlTheme {
    /// Baseline look (no-op; relies on baseline.css)
    #[default]
    Modern,
    /// Serif typography override
    Serif,
}

impl HtmlTheme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "modern" | "default" => Some(HtmlTheme::Modern),
            "serif" => Some(HtmlTheme::Serif),
            _ => None,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            HtmlTheme::Modern => include_str!("../../../css/themes/theme-modern.css"),
            HtmlTheme::Serif => include_str!("../../../css/themes/theme-serif.css"),
        }
    }
}

/// Options for [`wrap_as_document_with_options`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOptions {
    /// `<title>` text; derived from the fragment when `None`
    pub title: Option<String>,
    pub theme: HtmlTheme,
    /// CSS appended after the baseline and theme CSS
    pub custom_css: Option<String>,
}

/// The baseline stylesheet embedded in every document.
pub fn default_css() -> &'static str {
    BASELINE_CSS
}

/// Title for a fragment: the text of its first `<h1>`, tags stripped.
pub fn document_title(fragment: &str) -> String {
    FIRST_H1
        .captures(fragment)
        .map(|caps| TAG.replace_all(&caps[1], "").trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

/// Wrap a fragment in a complete HTML5 document using default options.
pub fn wrap_as_document(fragment: &str) -> String {
    wrap_as_document_with_options(fragment, &DocumentOptions::default())
}

pub fn wrap_as_document_with_options(fragment: &str, options: &DocumentOptions) -> String {
    let title = match options.title.as_deref() {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => document_title(fragment),
    };
    let escaped_title = escape_html(&title);
    let theme_css = options.theme.css();
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="mdconv">
  <title>{escaped_title}</title>
  <style>
{BASELINE_CSS}
{theme_css}
{custom_css}
  </style>
</head>
<body>
<main class="mdconv-document">
{fragment}
</main>
</body>
</html>
"#
    )
}
