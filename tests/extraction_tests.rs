//! Extraction integration tests
//!
//! These exercise the full extraction path: noise filtering, social link
//! collection, and the heading-grouped walk, through the public API.

use pagesift::extraction::{ContentExtractor, NOISE_TAGS};
use pretty_assertions::assert_eq;

#[test]
fn test_worked_example_with_heading_and_social_link() {
    let html = r#"<body><h2>Overview</h2><p>Hello</p><p>World</p><a href="https://twitter.com/x">tw</a></body>"#;
    let content = ContentExtractor::extract(html);
    assert_eq!(
        content.text,
        "=== OVERVIEW ===\nHello World\n\n=== SOCIAL MEDIA LINKS ===\nhttps://twitter.com/x"
    );
    assert_eq!(content.block_count, 2);
    assert_eq!(content.social_links, vec!["https://twitter.com/x".to_string()]);
}

#[test]
fn test_no_heading_yields_bare_newline_joined_block() {
    let content = ContentExtractor::extract("<body><p>Just text</p></body>");
    assert_eq!(content.text, "Just text");

    let content = ContentExtractor::extract("<body><p>first</p><p>second</p></body>");
    assert_eq!(content.text, "first\nsecond");
}

#[test]
fn test_denylisted_subtrees_contribute_nothing() {
    let html = r#"<body>
        <h1>Title</h1>
        <p>visible</p>
        <script>var secret_js = 1;</script>
        <style>.secret-css {}</style>
        <nav><span>secret-nav</span></nav>
        <footer><p>secret-footer</p></footer>
        <aside><li>secret-aside</li></aside>
        <form><p>secret-form</p></form>
        <noscript><p>secret-noscript</p></noscript>
        <iframe src="x">secret-iframe</iframe>
        <dialog><p>secret-dialog</p></dialog>
    </body>"#;
    let content = ContentExtractor::extract(html);
    assert!(content.text.contains("visible"));
    assert!(!content.text.contains("secret"));
}

#[test]
fn test_headings_emit_in_document_order_uppercased() {
    let html = r#"<body>
        <h1>intro</h1><p>one</p>
        <h2>Details</h2><p>two</p>
        <h3>  faq  </h3><p>three</p>
    </body>"#;
    let content = ContentExtractor::extract(html);
    assert_eq!(
        content.text,
        "=== INTRO ===\none\n\n=== DETAILS ===\ntwo\n\n=== FAQ ===\nthree"
    );
}

#[test]
fn test_all_six_heading_levels_open_blocks() {
    let mut html = String::from("<body>");
    for level in 1..=6 {
        html.push_str(&format!(
            "<h{level}>Section {level}</h{level}><p>body {level}</p>"
        ));
    }
    html.push_str("</body>");

    let content = ContentExtractor::extract(&html);
    assert_eq!(content.block_count, 6);
    for level in 1..=6 {
        assert!(content.text.contains(&format!("=== SECTION {level} ===")));
    }
}

#[test]
fn test_heading_with_only_whitespace_content_is_dropped() {
    let html = "<body><h2>Empty Section</h2><p>   </p><div>\n\t</div></body>";
    let content = ContentExtractor::extract(html);
    assert_eq!(content.text, "");
    assert_eq!(content.block_count, 0);
}

#[test]
fn test_heading_with_no_content_before_next_heading_is_dropped() {
    let html = "<body><h2>Ghost</h2><h2>Real</h2><p>body</p></body>";
    let content = ContentExtractor::extract(html);
    assert_eq!(content.text, "=== REAL ===\nbody");
}

#[test]
fn test_preheading_text_is_discarded_once_a_heading_appears() {
    let html = "<body><p>intro</p><h2>Section</h2><p>body</p></body>";
    let content = ContentExtractor::extract(html);
    assert_eq!(content.text, "=== SECTION ===\nbody");
}

#[test]
fn test_social_links_deduplicated_and_sorted() {
    let html = r#"<body>
        <p>follow us</p>
        <a href="https://twitter.com/x">one</a>
        <a href="https://twitter.com/x">two</a>
        <a href="https://facebook.com/x">fb</a>
    </body>"#;
    let content = ContentExtractor::extract(html);
    assert_eq!(
        content.text,
        "follow us\n\n=== SOCIAL MEDIA LINKS ===\nhttps://facebook.com/x\nhttps://twitter.com/x"
    );
}

#[test]
fn test_social_links_in_noise_subtrees_are_not_collected() {
    let html = r#"<body>
        <p>content</p>
        <footer><a href="https://instagram.com/corp">ig</a></footer>
    </body>"#;
    let content = ContentExtractor::extract(html);
    assert!(content.social_links.is_empty());
    assert!(!content.text.contains("SOCIAL MEDIA LINKS"));
}

#[test]
fn test_anchor_text_is_not_a_text_bearing_container() {
    let html = r#"<body><h2>T</h2><a href="https://example.com">link text</a><p>body</p></body>"#;
    let content = ContentExtractor::extract(html);
    assert_eq!(content.text, "=== T ===\nbody");
}

#[test]
fn test_nested_containers_contribute_text_separately() {
    // Every descendant container is visited on its own, so nesting
    // duplicates text into the block. Pinned, not accidental.
    let html = "<body><h2>T</h2><div><p>inner</p></div></body>";
    let content = ContentExtractor::extract(html);
    assert_eq!(content.text, "=== T ===\ninner inner");
}

#[test]
fn test_list_items_are_text_bearing() {
    let html = "<body><h2>Menu</h2><ul><li>alpha</li><li>beta</li></ul></body>";
    let content = ContentExtractor::extract(html);
    assert_eq!(content.text, "=== MENU ===\nalpha beta");
}

#[test]
fn test_extraction_is_idempotent() {
    let html = r#"<body>
        <h1>Title</h1><p>alpha</p>
        <h2>More</h2><div>beta</div>
        <a href="https://t.me/chan">tg</a>
    </body>"#;
    let first = ContentExtractor::extract(html);
    let second = ContentExtractor::extract(html);
    assert_eq!(first.text, second.text);
    assert_eq!(first.social_links, second.social_links);
}

#[test]
fn test_malformed_html_never_panics() {
    for html in [
        "<body><h2>Unclosed",
        "<p>orphan</p></div></div>",
        "<<<>>>",
        "<body><h1></h1><p>&nbsp;&amp;</p>",
        "plain text, no markup at all",
    ] {
        let _ = ContentExtractor::extract(html);
    }
}

#[test]
fn test_every_noise_tag_is_covered() {
    // Keep the denylist aligned with the documented set.
    let expected = [
        "script", "style", "header", "footer", "nav", "form", "noscript", "svg", "aside", "dialog",
        "iframe",
    ];
    assert_eq!(NOISE_TAGS, expected);
}
