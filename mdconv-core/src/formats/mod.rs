//! Format implementations
//!
//! Both built-in formats run the same Markdown pipeline; they differ only in
//! whether the fragment is wrapped in a standalone document.

pub mod html;
pub mod options;

pub use html::{
    default_css, document_title, wrap_as_document, wrap_as_document_with_options,
    DocumentOptions, HtmlDocumentFormat, HtmlFormat, HtmlTheme,
};
