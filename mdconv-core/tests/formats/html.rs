use mdconv_core::{FormatError, FormatRegistry};
use std::collections::HashMap;

fn options(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn html_fragment_through_registry() {
    let registry = FormatRegistry::default();
    let html = registry.render("# Hi\n\nthere", "html", &HashMap::new());
    assert_eq!(html, Ok("<h1>Hi</h1>\n<p>there</p>".to_string()));
}

#[test]
fn html_document_through_registry() {
    let registry = FormatRegistry::default();
    let html = registry
        .render("# Notes\n\n- one", "html-document", &HashMap::new())
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Notes</title>"));
    assert!(html.contains("<h1>Notes</h1>\n<ul>\n  <li>one</li>\n</ul>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn document_title_option_overrides_heading() {
    let registry = FormatRegistry::default();
    let html = registry
        .render(
            "# Heading",
            "html-document",
            &options(&[("title", "Chosen")]),
        )
        .unwrap();
    assert!(html.contains("<title>Chosen</title>"));
}

#[test]
fn shield_option_applies_to_both_formats() {
    let registry = FormatRegistry::default();
    let opts = options(&[("shield-fences", "yes")]);
    let source = "```\n**raw**\n```";

    let fragment = registry.render(source, "html", &opts).unwrap();
    assert_eq!(fragment, "<pre><code>**raw**</code></pre>");

    let document = registry.render(source, "html-document", &opts).unwrap();
    assert!(document.contains("<pre><code>**raw**</code></pre>"));
}

#[test]
fn invalid_bool_is_reported() {
    let registry = FormatRegistry::default();
    let result = registry.render("x", "html", &options(&[("shield-fences", "sometimes")]));
    assert_eq!(
        result,
        Err(FormatError::InvalidOption {
            key: "shield-fences".to_string(),
            value: "sometimes".to_string(),
        })
    );
}

#[test]
fn unknown_format_is_reported() {
    let registry = FormatRegistry::default();
    let result = registry.render("x", "pdf", &HashMap::new());
    assert_eq!(result, Err(FormatError::FormatNotFound("pdf".to_string())));
}
