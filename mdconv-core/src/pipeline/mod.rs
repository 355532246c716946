//! The Markdown → HTML rewriting pipeline.
//!
//! Rendering is a fixed sequence of whole-text rewrites. Each stage takes the
//! previous stage's output string and returns a new one; no stage looks at
//! what a later stage will do and no state survives between calls.
//!
//!     headers → inline spans → lists → fenced code → paragraphs
//!
//! Because the inline pass runs before fenced code is extracted, markdown
//! characters inside a fence are rewritten before the body is escaped. That
//! ordering is the default. [`RenderOptions::shield_code_fences`] moves fence
//! extraction to the front instead, hiding each block behind a placeholder
//! until paragraphs are assembled.

pub mod escape;
pub mod fences;
pub mod headers;
pub mod inline;
pub mod lines;
pub mod lists;
pub mod paragraphs;

use fences::FencedCodeExtractor;
use headers::HeaderRewriter;
use inline::InlineSpanRewriter;
use lists::ListGrouper;
use paragraphs::ParagraphAssembler;
use tracing::{debug, trace};

/// A single whole-text rewrite.
pub trait TextTransform: Send + Sync {
    fn apply(&self, text: String) -> String;
}

/// A named pipeline stage.
pub struct Stage {
    pub name: &'static str,
    pub transform: &'static dyn TextTransform,
}

const STANDARD_STAGES: &[Stage] = &[
    Stage {
        name: "headers",
        transform: &HeaderRewriter,
    },
    Stage {
        name: "inline",
        transform: &InlineSpanRewriter,
    },
    Stage {
        name: "lists",
        transform: &ListGrouper,
    },
    Stage {
        name: "fences",
        transform: &FencedCodeExtractor,
    },
    Stage {
        name: "paragraphs",
        transform: &ParagraphAssembler,
    },
];

// Fences are taken out before these stages run and put back afterwards.
const SHIELDED_STAGES: &[Stage] = &[
    Stage {
        name: "headers",
        transform: &HeaderRewriter,
    },
    Stage {
        name: "inline",
        transform: &InlineSpanRewriter,
    },
    Stage {
        name: "lists",
        transform: &ListGrouper,
    },
    Stage {
        name: "paragraphs",
        transform: &ParagraphAssembler,
    },
];

/// An ordered list of stages.
pub struct Pipeline {
    stages: &'static [Stage],
}

impl Pipeline {
    /// The default stage order.
    pub fn standard() -> Self {
        Self {
            stages: STANDARD_STAGES,
        }
    }

    /// The stage order used between shielding and restoring fences.
    pub fn shielded() -> Self {
        Self {
            stages: SHIELDED_STAGES,
        }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name).collect()
    }

    pub fn run(&self, text: String) -> String {
        self.stages.iter().fold(text, |text, stage| {
            let input_len = text.len();
            let output = stage.transform.apply(text);
            trace!(
                stage = stage.name,
                input_len,
                output_len = output.len(),
                "stage complete"
            );
            output
        })
    }
}

/// Knobs for [`render_with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Extract fenced code before any other stage so fence bodies are never
    /// touched by the inline or list passes.
    pub shield_code_fences: bool,
}

impl RenderOptions {
    pub fn with_shielded_fences(mut self) -> Self {
        self.shield_code_fences = true;
        self
    }
}

/// Convert Markdown text into an HTML fragment using the default options.
///
/// Never fails: constructs that do not match a rule stay in the output as
/// literal text.
pub fn render(markdown: &str) -> String {
    render_with_options(markdown, &RenderOptions::default())
}

/// Convert Markdown text into an HTML fragment.
pub fn render_with_options(markdown: &str, options: &RenderOptions) -> String {
    let text = normalize_line_endings(markdown);

    let html = if options.shield_code_fences {
        let (shielded, blocks) = fences::shield(&text);
        debug!(fences = blocks.len(), "shielded fenced code blocks");
        let body = Pipeline::shielded().run(shielded);
        blocks.restore(&body)
    } else {
        Pipeline::standard().run(text)
    };

    debug!(
        input_len = markdown.len(),
        output_len = html.len(),
        shielded = options.shield_code_fences,
        "rendered markdown"
    );
    html
}

fn normalize_line_endings(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}
