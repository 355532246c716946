//! Format trait definition
//!
//! An output format turns Markdown source into a particular flavor of HTML
//! text. Formats are looked up by name through the
//! [`FormatRegistry`](crate::registry::FormatRegistry).

use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Format for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn render(&self, markdown: &str) -> String {
///         mdconv_core::render(markdown).to_uppercase()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "html-document")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used to pick a format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render Markdown with this format's defaults.
    fn render(&self, markdown: &str) -> String;

    /// Render Markdown using extra parameters.
    ///
    /// The default implementation accepts no parameters at all; formats with
    /// knobs override it.
    fn render_with_options(
        &self,
        markdown: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            Ok(self.render(markdown))
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
