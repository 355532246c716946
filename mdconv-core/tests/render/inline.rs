//! Inline spans inside paragraphs.

use mdconv_core::render;

#[test]
fn bold_and_italic_precedence() {
    let html = render("**bold** and *italic*");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<em>italic</em>"));
    assert!(!html.contains('*'));
    assert_eq!(html, "<p><strong>bold</strong> and <em>italic</em></p>");
}

#[test]
fn inline_code() {
    assert_eq!(
        render("call `render()` once"),
        "<p>call <code>render()</code> once</p>"
    );
}

#[test]
fn link_and_image() {
    assert_eq!(
        render("[site](https://example.com) ![logo](logo.png)"),
        r#"<p><a href="https://example.com">site</a> <img src="logo.png" alt="logo"></p>"#
    );
}

#[test]
fn line_made_of_a_single_span_is_not_a_paragraph() {
    // Starts with `<` and ends with `>` once rewritten.
    assert_eq!(render("**alone**"), "<strong>alone</strong>");
    assert_eq!(
        render("![only](a.png)"),
        r#"<img src="a.png" alt="only">"#
    );
}

#[test]
fn heading_text_gets_inline_spans() {
    assert_eq!(
        render("# The *real* title"),
        "<h1>The <em>real</em> title</h1>"
    );
}

#[test]
fn unmatched_delimiters_stay_literal() {
    assert_eq!(render("2 * 3 = 6"), "<p>2 * 3 = 6</p>");
    assert_eq!(render("**unclosed"), "<p>**unclosed</p>");
    assert_eq!(render("a [label]( b"), "<p>a [label]( b</p>");
}

#[test]
fn paragraph_text_is_not_escaped() {
    assert_eq!(render("fish & chips"), "<p>fish & chips</p>");
}
