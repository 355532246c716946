//! Markdown to HTML conversion
//!
//!     This crate turns Markdown text into HTML with a small, deterministic
//!     rewriting pipeline. It is not a CommonMark implementation: there is no
//!     syntax tree, no nesting, no reference links and no escaping of literal
//!     markdown characters. What it offers is a predictable string-to-string
//!     function that never fails.
//!
//!     This is a pure lib: it powers the mdconv CLI but makes no assumptions
//!     about a shell environment, be it stdout, env vars or files.
//!
//! Architecture
//!
//!     The pipeline (./pipeline/mod.rs) is a fixed list of stages, each a
//!     whole-text rewrite:
//!
//!     .
//!     ├── pipeline
//!     │   ├── headers.rs      # `#`-prefixed lines → <h1>..<h6>
//!     │   ├── inline.rs       # bold, italic, code, link, image
//!     │   ├── lists.rs        # runs of `- `/`* ` and `1. ` lines → <ul>/<ol>
//!     │   ├── fences.rs       # ``` blocks → escaped <pre><code>
//!     │   ├── paragraphs.rs   # remaining text lines → <p>
//!     │   ├── lines.rs        # per-stage line classification
//!     │   └── escape.rs       # HTML escaping
//!     ├── formats             # output formats built on the pipeline
//!     ├── format.rs           # Format trait
//!     ├── registry.rs         # FormatRegistry for discovery and selection
//!     └── error.rs
//!
//!     Stages only ever see the text produced by the stage before them. A
//!     line that is already a complete HTML element (trimmed, it starts with
//!     `<` and ends with `>`) is left alone by the paragraph stage, which is
//!     how headings, list containers and code blocks survive to the output.
//!
//! Formats
//!
//!     - `html`: the bare fragment
//!     - `html-document`: the fragment in a standalone HTML5 document with
//!       embedded CSS
//!
//! Concurrency
//!
//!     Rendering allocates its own buffers per call. The compiled patterns are
//!     immutable statics, so any number of threads may render at once.
pub mod error;
pub mod format;
pub mod formats;
pub mod pipeline;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::{wrap_as_document, wrap_as_document_with_options, DocumentOptions, HtmlTheme};
pub use pipeline::escape::escape_html;
pub use pipeline::{render, render_with_options, RenderOptions};
pub use registry::FormatRegistry;
