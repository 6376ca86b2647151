//! Plaintext dialect → restricted document HTML.
//!
//! A line-oriented state machine. At most one multi-line construct (list,
//! blockquote, or callout) is open at a time; starting one flushes the
//! others, so the states are mutually exclusive by construction.

use std::fmt::Write;

use crate::dom::{escape_attr, escape_text};

/// Kind of open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

/// Accumulates emitted blocks and the one open multi-line construct.
struct Intake {
    blocks: Vec<String>,
    list: Option<(ListKind, Vec<String>)>,
    quote_lines: Vec<String>,
    callout: Option<(String, Vec<String>)>,
}

/// Convert plaintext markup into restricted document HTML.
///
/// Unterminated constructs at end of input are implicitly closed; no content
/// is dropped. Intake recognizes `##`/`###` heading markers but not bare `#`,
/// mirroring the export direction's asymmetry.
///
/// # Examples
///
/// ```
/// use folio::to_document_html;
///
/// let html = to_document_html("## Title\n\nSome text\n\n- a\n- b");
/// assert_eq!(
///     html,
///     "<h2>Title</h2><p>Some text</p><ul><li>a</li><li>b</li></ul>"
/// );
/// ```
pub fn to_document_html(text: &str) -> String {
    let mut intake = Intake {
        blocks: Vec::new(),
        list: None,
        quote_lines: Vec::new(),
        callout: None,
    };

    for line in text.lines() {
        intake.feed(line);
    }
    intake.finish()
}

impl Intake {
    fn feed(&mut self, line: &str) {
        // Inside a callout the body is verbatim until the bare close marker;
        // blank lines are internal paragraph separators.
        if let Some((_, body)) = &mut self.callout {
            if line.trim() == ":::" {
                self.flush_callout();
            } else {
                body.push(line.to_string());
            }
            return;
        }

        let trimmed = line.trim();

        if trimmed.is_empty() {
            // Block separator: closes open constructs, emits nothing of its
            // own (blocks are already distinct elements).
            self.flush_list();
            self.flush_quote();
            return;
        }

        if let Some(rest) = trimmed.strip_prefix(":::") {
            self.flush_list();
            self.flush_quote();
            self.callout = Some((callout_token(rest), Vec::new()));
            return;
        }

        if let Some(rest) = trimmed.strip_prefix('>') {
            self.flush_list();
            self.quote_lines
                .push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
            return;
        }
        // A non-blockquote line ends an open blockquote.
        if !self.quote_lines.is_empty() {
            self.flush_quote();
        }

        if is_rule_line(trimmed) {
            self.flush_list();
            self.blocks.push("<hr/>".to_string());
            return;
        }

        // Check the longer marker first; intake never maps `# ` to an H1.
        if let Some(rest) = trimmed.strip_prefix("### ") {
            self.flush_list();
            self.blocks
                .push(format!("<h3>{}</h3>", escape_text(rest.trim())));
            return;
        }
        if let Some(rest) = trimmed.strip_prefix("## ") {
            self.flush_list();
            self.blocks
                .push(format!("<h2>{}</h2>", escape_text(rest.trim())));
            return;
        }

        if let Some((kind, item)) = parse_list_item(trimmed) {
            match &mut self.list {
                Some((open_kind, items)) if *open_kind == kind => {
                    items.push(item.to_string());
                }
                _ => {
                    self.flush_list();
                    self.list = Some((kind, vec![item.to_string()]));
                }
            }
            return;
        }

        self.flush_list();
        self.blocks.push(format!("<p>{}</p>", escape_text(trimmed)));
    }

    fn finish(mut self) -> String {
        self.flush_list();
        self.flush_quote();
        self.flush_callout();
        self.blocks.concat()
    }

    fn flush_list(&mut self) {
        let Some((kind, items)) = self.list.take() else {
            return;
        };
        let tag = match kind {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        };
        let mut out = format!("<{}>", tag);
        for item in items {
            let _ = write!(out, "<li>{}</li>", escape_text(&item));
        }
        let _ = write!(out, "</{}>", tag);
        self.blocks.push(out);
    }

    fn flush_quote(&mut self) {
        if self.quote_lines.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.quote_lines);
        let mut out = String::from("<blockquote>");
        for paragraph in split_paragraphs(&lines) {
            let _ = write!(out, "<p>{}</p>", paragraph);
        }
        out.push_str("</blockquote>");
        self.blocks.push(out);
    }

    fn flush_callout(&mut self) {
        let Some((kind, body)) = self.callout.take() else {
            return;
        };
        let mut out = format!("<div data-callout=\"{}\">", escape_attr(&kind));
        for paragraph in split_paragraphs(&body) {
            let _ = write!(out, "<p>{}</p>", paragraph);
        }
        out.push_str("</div>");
        self.blocks.push(out);
    }
}

/// Split buffered lines on blank-line runs; lines within one paragraph join
/// with `<br/>` so explicit line breaks survive the round trip. Each returned
/// paragraph is already escaped.
fn split_paragraphs(lines: &[String]) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("<br/>"));
                current.clear();
            }
        } else {
            current.push(escape_text(line.trim()));
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("<br/>"));
    }
    paragraphs
}

/// Normalize a callout kind to a safe attribute token: the first word of the
/// fence, lowercased, restricted to alphanumerics and hyphens. An empty
/// result falls back to `info`.
fn callout_token(raw: &str) -> String {
    let first = raw.split_whitespace().next().unwrap_or("");
    let token: String = first
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if token.is_empty() { "info".to_string() } else { token }
}

/// Horizontal rule: 3+ of the same `-`, `_`, or `*`, whitespace-insensitive.
fn is_rule_line(line: &str) -> bool {
    let compact: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() < 3 {
        return false;
    }
    let first = compact[0];
    matches!(first, '-' | '_' | '*') && compact.iter().all(|&c| c == first)
}

/// Parse `- `/`* ` and `N. ` list markers.
fn parse_list_item(line: &str) -> Option<(ListKind, &str)> {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Some((ListKind::Unordered, rest.trim()));
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix(". ") {
            return Some((ListKind::Ordered, rest.trim()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_paragraph_list() {
        assert_eq!(
            to_document_html("## Title\n\nSome text\n\n- a\n- b"),
            "<h2>Title</h2><p>Some text</p><ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn intake_does_not_recognize_h1() {
        assert_eq!(to_document_html("# Top"), "<p># Top</p>");
        assert_eq!(to_document_html("### Sub"), "<h3>Sub</h3>");
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            to_document_html("1. one\n2. two\n10. ten"),
            "<ol><li>one</li><li>two</li><li>ten</li></ol>"
        );
    }

    #[test]
    fn switching_list_kind_starts_new_list() {
        assert_eq!(
            to_document_html("- a\n1. b"),
            "<ul><li>a</li></ul><ol><li>b</li></ol>"
        );
    }

    #[test]
    fn blockquote_lines_merge() {
        assert_eq!(
            to_document_html("> first\n> second"),
            "<blockquote><p>first<br/>second</p></blockquote>"
        );
    }

    #[test]
    fn blockquote_flushed_by_plain_line() {
        assert_eq!(
            to_document_html("> quoted\nplain"),
            "<blockquote><p>quoted</p></blockquote><p>plain</p>"
        );
    }

    #[test]
    fn empty_quote_marker_splits_paragraphs() {
        assert_eq!(
            to_document_html("> a\n>\n> b"),
            "<blockquote><p>a</p><p>b</p></blockquote>"
        );
    }

    #[test]
    fn horizontal_rules() {
        assert_eq!(to_document_html("---"), "<hr/>");
        assert_eq!(to_document_html("_ _ _ _"), "<hr/>");
        assert_eq!(to_document_html("*****"), "<hr/>");
        assert_eq!(to_document_html("--"), "<p>--</p>");
    }

    #[test]
    fn callout_block() {
        assert_eq!(
            to_document_html("::: warning\nCareful\n:::"),
            "<div data-callout=\"warning\"><p>Careful</p></div>"
        );
    }

    #[test]
    fn callout_internal_blank_separates_paragraphs() {
        assert_eq!(
            to_document_html("::: note\nfirst\n\nsecond\n:::"),
            "<div data-callout=\"note\"><p>first</p><p>second</p></div>"
        );
    }

    #[test]
    fn callout_kind_is_restricted_to_a_token() {
        // A quote in the fence must not escape the attribute.
        assert_eq!(
            to_document_html("::: x\" onclick=\"evil\nbody\n:::"),
            r#"<div data-callout="x"><p>body</p></div>"#
        );
        assert_eq!(
            to_document_html("::: Warning!\nx\n:::"),
            r#"<div data-callout="warning"><p>x</p></div>"#
        );
        // A fence that normalizes to nothing falls back to info.
        assert_eq!(
            to_document_html("::: <>&\nx\n:::"),
            r#"<div data-callout="info"><p>x</p></div>"#
        );
    }

    #[test]
    fn callout_body_is_verbatim() {
        // Markers inside a callout body are not interpreted.
        assert_eq!(
            to_document_html("::: tip\n## not a heading\n:::"),
            "<div data-callout=\"tip\"><p>## not a heading</p></div>"
        );
    }

    #[test]
    fn unterminated_constructs_flush_at_eof() {
        assert_eq!(
            to_document_html("::: info\ndangling"),
            "<div data-callout=\"info\"><p>dangling</p></div>"
        );
        assert_eq!(
            to_document_html("> dangling"),
            "<blockquote><p>dangling</p></blockquote>"
        );
        assert_eq!(to_document_html("- dangling"), "<ul><li>dangling</li></ul>");
    }

    #[test]
    fn callout_start_flushes_open_list() {
        assert_eq!(
            to_document_html("- a\n::: note\nx\n:::"),
            "<ul><li>a</li></ul><div data-callout=\"note\"><p>x</p></div>"
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(
            to_document_html("a < b & c"),
            "<p>a &lt; b &amp; c</p>"
        );
    }

    #[test]
    fn blank_runs_collapse() {
        assert_eq!(
            to_document_html("\n\n\na\n\n\n\nb\n\n"),
            "<p>a</p><p>b</p>"
        );
    }
}
