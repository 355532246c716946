//! Behavior that follows directly from the stage order.
//!
//! Inline spans are rewritten before fenced code is extracted, and the
//! paragraph stage only sees single lines. These tests pin that behavior
//! for the default options and show the shielded alternative.

use mdconv_core::{render, render_with_options, RenderOptions};

fn shielded(markdown: &str) -> String {
    render_with_options(markdown, &RenderOptions::default().with_shielded_fences())
}

#[test]
fn markdown_inside_fence_is_rewritten_then_escaped() {
    assert_eq!(
        render("```\nlet x = *ptr;  // *deref*\n```"),
        "<pre><code>let x = &lt;em&gt;ptr;  // &lt;/em&gt;deref*</code></pre>"
    );
}

#[test]
fn shielded_fence_body_is_verbatim() {
    assert_eq!(
        shielded("```\nlet x = *ptr;  // *deref*\n```"),
        "<pre><code>let x = *ptr;  // *deref*</code></pre>"
    );
}

#[test]
fn multi_line_fence_is_merged_into_paragraphs() {
    assert_eq!(
        render("```\na\nb\n```"),
        "<p><pre><code>a b</code></pre></p>"
    );
}

#[test]
fn shielded_multi_line_fence_keeps_its_lines() {
    assert_eq!(shielded("```\na\nb\n```"), "<pre><code>a\nb</code></pre>");
}

#[test]
fn list_markers_inside_fence_become_items() {
    assert_eq!(
        render("```\n- not a list\n```"),
        "<p><pre><code>&lt;ul&gt; &lt;li&gt;not a list&lt;/li&gt; &lt;/ul&gt;</code></pre></p>"
    );
}

#[test]
fn shielded_fence_with_list_markers() {
    assert_eq!(
        shielded("intro\n\n```\n- not a list\n```\n\n- a real item"),
        "<p>intro</p>\n<pre><code>- not a list</code></pre>\n<ul>\n  <li>a real item</li>\n</ul>"
    );
}

#[test]
fn shielding_keeps_author_comments_shaped_like_placeholders() {
    assert_eq!(
        shielded("Literal <!--mdconv:fence:0--> comment\n\n```\nx\n```"),
        "<p>Literal <!--mdconv:fence:0--> comment</p>\n<pre><code>x</code></pre>"
    );
}
