//! Whole documents and degenerate input.

use insta::assert_snapshot;
use mdconv_core::render;

const RELEASE_NOTES: &str = r#"# Release notes

Version **2.1** ships *today*.
See [the changelog](https://example.com/changes) for details.

## Highlights

- Faster `render`
- Smaller binaries

1. Download
2. Install

```sh
make install
```

<div class="note">Raw HTML stays put.</div>
"#;

#[test]
fn release_notes() {
    assert_snapshot!(render(RELEASE_NOTES), @r#"
    <h1>Release notes</h1>
    <p>Version <strong>2.1</strong> ships <em>today</em>. See <a href="https://example.com/changes">the changelog</a> for details.</p>
    <h2>Highlights</h2>
    <ul>
      <li>Faster <code>render</code></li>
      <li>Smaller binaries</li>
    </ul>
    <ol>
      <li>Download</li>
      <li>Install</li>
    </ol>
    <pre><code class="language-sh">make install</code></pre>
    <div class="note">Raw HTML stays put.</div>
    "#);
}

#[test]
fn empty_input() {
    assert_eq!(render(""), "");
}

#[test]
fn only_blank_lines() {
    assert_eq!(render("\n\n   \n\t\n"), "");
}

#[test]
fn crlf_document_matches_lf_document() {
    let lf = RELEASE_NOTES.to_string();
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(render(&crlf), render(&lf));
}

#[test]
fn unterminated_fence_is_literal_text() {
    assert_eq!(render("```rust\nfn main() {}"), "<p>```rust fn main() {}</p>");
}

#[test]
fn unusual_characters_survive() {
    let html = render("nul \u{0} and bom \u{feff} and nbsp\u{a0}here");
    assert!(html.starts_with("<p>"));
    assert!(html.contains('\u{0}'));
}

#[test]
fn concurrent_renders_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("# Doc {i}\n\n- item {i}");
                (i, render(&source))
            })
        })
        .collect();

    for handle in handles {
        let (i, html) = handle.join().expect("render thread panicked");
        assert_eq!(
            html,
            format!("<h1>Doc {i}</h1>\n<ul>\n  <li>item {i}</li>\n</ul>")
        );
    }
}
