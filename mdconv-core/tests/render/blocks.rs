//! Headings, lists, fenced code and paragraphs.

use mdconv_core::render;

fn lines(html: &str) -> Vec<&str> {
    html.split('\n').collect()
}

#[test]
fn heading_produces_single_h1() {
    let html = render("# Title");
    assert_eq!(html, "<h1>Title</h1>");
    for level in 2..=6 {
        assert!(!html.contains(&format!("<h{level}>")));
    }
}

#[test]
fn every_heading_level() {
    let html = render("# 1\n## 2\n### 3\n#### 4\n##### 5\n###### 6");
    assert_eq!(
        lines(&html),
        vec![
            "<h1>1</h1>",
            "<h2>2</h2>",
            "<h3>3</h3>",
            "<h4>4</h4>",
            "<h5>5</h5>",
            "<h6>6</h6>",
        ]
    );
}

#[test]
fn list_then_paragraph() {
    let html = render("- a\n- b\n\ntext");
    assert_eq!(
        lines(&html),
        vec!["<ul>", "  <li>a</li>", "  <li>b</li>", "</ul>", "<p>text</p>"]
    );
}

#[test]
fn list_directly_followed_by_text() {
    let html = render("- a\ntext");
    assert_eq!(
        lines(&html),
        vec!["<ul>", "  <li>a</li>", "</ul>", "<p>text</p>"]
    );
}

#[test]
fn ordered_list_at_end_of_document() {
    let html = render("Steps:\n1. first\n2. second");
    assert_eq!(
        lines(&html),
        vec![
            "<p>Steps:</p>",
            "<ol>",
            "  <li>first</li>",
            "  <li>second</li>",
            "</ol>",
        ]
    );
}

#[test]
fn unordered_item_keeps_spaces_after_the_marker_space() {
    assert_eq!(render("-   c"), "<ul>\n  <li>  c</li>\n</ul>");
}

#[test]
fn ordered_marker_needs_a_space_after_the_dot() {
    assert_eq!(render("1.\tone"), "<p>1.\tone</p>");
    assert_eq!(render("1.   one"), "<ol>\n  <li>one</li>\n</ol>");
}

#[test]
fn list_items_keep_inline_markup() {
    let html = render("- **bold** item\n- [link](/x)");
    assert_eq!(
        lines(&html),
        vec![
            "<ul>",
            "  <li><strong>bold</strong> item</li>",
            r#"  <li><a href="/x">link</a></li>"#,
            "</ul>",
        ]
    );
}

#[test]
fn fenced_code_with_language() {
    assert_eq!(
        render("```go\nx := 1\n```"),
        r#"<pre><code class="language-go">x := 1</code></pre>"#
    );
}

#[test]
fn fenced_code_body_is_escaped() {
    assert_eq!(
        render("```\nif a < b && c > d {}\n```"),
        "<pre><code>if a &lt; b &amp;&amp; c &gt; d {}</code></pre>"
    );
}

#[test]
fn fenced_code_between_paragraphs() {
    let html = render("before\n\n```sh\nls -la\n```\n\nafter");
    assert_eq!(
        lines(&html),
        vec![
            "<p>before</p>",
            r#"<pre><code class="language-sh">ls -la</code></pre>"#,
            "<p>after</p>",
        ]
    );
}

#[test]
fn paragraph_merges_adjacent_lines() {
    assert_eq!(render("line one\nline two"), "<p>line one line two</p>");
}

#[test]
fn paragraphs_split_on_blank_lines() {
    assert_eq!(
        render("first\n\n\n   \nsecond"),
        "<p>first</p>\n<p>second</p>"
    );
}

#[test]
fn raw_html_line_is_not_wrapped() {
    assert_eq!(render("<div>x</div>"), "<div>x</div>");
    assert_eq!(
        render("text\n<div>x</div>\nmore"),
        "<p>text</p>\n<div>x</div>\n<p>more</p>"
    );
}

#[test]
fn heading_interrupts_paragraph() {
    assert_eq!(
        render("intro\n## Next\noutro"),
        "<p>intro</p>\n<h2>Next</h2>\n<p>outro</p>"
    );
}
