//! HTML output formats
//!
//! - `html`: the bare fragment produced by the pipeline, for embedding in an
//!   existing page or sending back as a response body.
//! - `html-document`: the same fragment inside a standalone HTML5 document
//!   with an embedded stylesheet.
//!
//! # Options
//!
//! | Key             | Formats          | Meaning                                     |
//! |-----------------|------------------|---------------------------------------------|
//! | `shield-fences` | both             | Extract fenced code before other stages     |
//! | `title`         | `html-document`  | `<title>` text (default: first `<h1>`)      |
//! | `theme`         | `html-document`  | `modern` (default) or `serif`               |
//! | `css`           | `html-document`  | Extra CSS appended after the theme          |

mod document;

pub use document::{
    default_css, document_title, wrap_as_document, wrap_as_document_with_options,
    DocumentOptions, HtmlTheme,
};

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::options::{parse_bool_flag, reject_unknown};
use crate::pipeline::{render_with_options, RenderOptions};
use std::collections::HashMap;

fn render_options_from(
    base: &RenderOptions,
    options: &HashMap<String, String>,
) -> Result<RenderOptions, FormatError> {
    Ok(RenderOptions {
        shield_code_fences: parse_bool_flag(options, "shield-fences", base.shield_code_fences)?,
    })
}

/// Format implementation for bare HTML fragments
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    render: RenderOptions,
}

impl HtmlFormat {
    pub fn new(render: RenderOptions) -> Self {
        Self { render }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment without a document shell"
    }

    fn render(&self, markdown: &str) -> String {
        render_with_options(markdown, &self.render)
    }

    fn render_with_options(
        &self,
        markdown: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown(options, self.name(), &["shield-fences"])?;
        let render = render_options_from(&self.render, options)?;
        Ok(render_with_options(markdown, &render))
    }
}

/// Format implementation for standalone HTML documents
#[derive(Debug, Clone, Default)]
pub struct HtmlDocumentFormat {
    render: RenderOptions,
    document: DocumentOptions,
}

impl HtmlDocumentFormat {
    pub fn new(render: RenderOptions, document: DocumentOptions) -> Self {
        Self { render, document }
    }
}

impl Format for HtmlDocumentFormat {
    fn name(&self) -> &str {
        "html-document"
    }

    fn description(&self) -> &str {
        "Standalone HTML5 document with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn render(&self, markdown: &str) -> String {
        let fragment = render_with_options(markdown, &self.render);
        wrap_as_document_with_options(&fragment, &self.document)
    }

    fn render_with_options(
        &self,
        markdown: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown(options, self.name(), &["shield-fences", "title", "theme", "css"])?;
        let render = render_options_from(&self.render, options)?;

        let mut document = self.document.clone();
        if let Some(title) = options.get("title") {
            document.title = Some(title.clone());
        }
        if let Some(theme) = options.get("theme") {
            document.theme =
                HtmlTheme::from_name(theme).ok_or_else(|| FormatError::InvalidOption {
                    key: "theme".to_string(),
                    value: theme.clone(),
                })?;
        }
        if let Some(css) = options.get("css") {
            document.custom_css = Some(css.clone());
        }

        let fragment = render_with_options(markdown, &render);
        Ok(wrap_as_document_with_options(&fragment, &document))
    }
}
