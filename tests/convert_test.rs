//! Bidirectional converter tests.
//!
//! Covers the export direction (document HTML → plaintext dialect), the
//! intake direction (plaintext → document HTML), and the round-trip contract:
//! structure survives, presentation does not.

use folio::{sanitize, split_blocks, to_document_html, to_plaintext};

use proptest::prelude::*;

// ============================================================================
// Export direction
// ============================================================================

#[test]
fn test_export_full_document() {
    let html = concat!(
        "<h2>Chapter One</h2>",
        "<p>It was a <strong>dark</strong> night.</p>",
        "<ul><li>wind</li><li>rain</li></ul>",
        "<hr/>",
        "<blockquote><p>So it goes.</p></blockquote>",
        r#"<div data-callout="tip"><p>Bring a coat.</p></div>"#,
    );
    let text = to_plaintext(html);
    assert_eq!(
        text,
        "## Chapter One\n\n\
         It was a dark night.\n\n\
         - wind\n- rain\n\n\
         ---\n\n\
         > So it goes.\n\n\
         ::: tip\nBring a coat.\n:::"
    );
}

#[test]
fn test_export_drops_inline_presentation() {
    let html = r#"<p style="font-size: 24px"><span style="font-weight: bold">loud</span> quiet</p>"#;
    assert_eq!(to_plaintext(html), "loud quiet");
}

#[test]
fn test_export_h1_emits_single_hash() {
    // Export still writes `# ` for an h1 even though intake will not read it
    // back as a heading.
    assert_eq!(to_plaintext("<h1>Top</h1>"), "# Top");
}

// ============================================================================
// Intake direction
// ============================================================================

#[test]
fn test_intake_full_document() {
    let text = "## Chapter One\n\nIt was a dark night.\n\n- wind\n- rain\n\n---\n\n> So it goes.\n\n::: tip\nBring a coat.\n:::";
    let html = to_document_html(text);
    assert_eq!(
        html,
        concat!(
            "<h2>Chapter One</h2>",
            "<p>It was a dark night.</p>",
            "<ul><li>wind</li><li>rain</li></ul>",
            "<hr/>",
            "<blockquote><p>So it goes.</p></blockquote>",
            r#"<div data-callout="tip"><p>Bring a coat.</p></div>"#,
        )
    );
}

#[test]
fn test_intake_output_is_already_sanitized() {
    let text = "## Title\n\na < b & c\n\n::: warning\nwatch <out>\n:::";
    let html = to_document_html(text);
    assert_eq!(sanitize(&html), html);
}

#[test]
fn test_intake_callout_kind_stays_in_the_model() {
    // A hostile fence must not smuggle attributes into the output.
    let html = to_document_html("::: x\" onclick=\"evil\nbody\n:::");
    assert_eq!(html, r#"<div data-callout="x"><p>body</p></div>"#);
    assert_eq!(sanitize(&html), html);
}

#[test]
fn test_intake_h1_asymmetry() {
    // `# ` is not an intake marker; the line lands in a paragraph verbatim.
    assert_eq!(to_document_html("# Not a heading"), "<p># Not a heading</p>");
}

#[test]
fn test_intake_blocks_feed_the_splitter() {
    let html = to_document_html("## T\n\nbody\n\n- a\n- b");
    let blocks = split_blocks(&html);
    assert_eq!(
        blocks,
        ["<h2>T</h2>", "<p>body</p>", "<ul><li>a</li><li>b</li></ul>"]
    );
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_round_trip_canonical_text() {
    let text = "## Title\n\nFirst paragraph.\n\n- one\n- two\n\n1. first\n2. second\n\n> quoted line\n\n::: danger\nstay back\n:::\n\n---\n\nLast.";
    let html = to_document_html(text);
    assert_eq!(to_plaintext(&html), text);
}

#[test]
fn test_round_trip_preserves_quote_line_breaks() {
    let text = "> roses are red\n> violets are blue";
    assert_eq!(to_plaintext(&to_document_html(text)), text);
}

#[test]
fn test_round_trip_html_structure() {
    // HTML → text → HTML keeps block structure; inline styling is gone.
    let html = r#"<h3>Sub</h3><p>Plain <em>styled</em> text</p><ul><li>x</li></ul>"#;
    let rebuilt = to_document_html(&to_plaintext(html));
    assert_eq!(rebuilt, "<h3>Sub</h3><p>Plain styled text</p><ul><li>x</li></ul>");
}

// ============================================================================
// Property tests
// ============================================================================

/// Words that cannot collide with any dialect marker.
fn arb_words() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{1,8}", 1..5).prop_map(|w| w.join(" "))
}

/// One canonical plaintext block.
fn arb_text_block() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_words(),
        arb_words().prop_map(|w| format!("## {w}")),
        arb_words().prop_map(|w| format!("### {w}")),
        Just("---".to_string()),
        proptest::collection::vec(arb_words(), 1..4)
            .prop_map(|items| items.iter().map(|i| format!("- {i}")).collect::<Vec<_>>().join("\n")),
        proptest::collection::vec(arb_words(), 1..4).prop_map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(i, item)| format!("{}. {}", i + 1, item))
                .collect::<Vec<_>>()
                .join("\n")
        }),
        proptest::collection::vec(arb_words(), 1..4)
            .prop_map(|lines| lines.iter().map(|l| format!("> {l}")).collect::<Vec<_>>().join("\n")),
        ("[a-z][a-z0-9-]{0,8}", arb_words())
            .prop_map(|(kind, body)| format!("::: {kind}\n{body}\n:::")),
    ]
}

fn arb_canonical_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(arb_text_block(), 1..6).prop_map(|blocks| blocks.join("\n\n"))
}

proptest! {
    #[test]
    fn prop_canonical_text_round_trips_exactly(text in arb_canonical_text()) {
        let html = to_document_html(&text);
        prop_assert_eq!(to_plaintext(&html), text);
    }

    #[test]
    fn prop_intake_output_is_sanitize_stable(text in arb_canonical_text()) {
        let html = to_document_html(&text);
        prop_assert_eq!(sanitize(&html), html);
    }

    #[test]
    fn prop_intake_html_round_trips_through_text(text in arb_canonical_text()) {
        // HTML produced by intake is canonical: projecting it to text and
        // reading it back reproduces the same HTML.
        let html = to_document_html(&text);
        let again = to_document_html(&to_plaintext(&html));
        prop_assert_eq!(again, html);
    }
}
