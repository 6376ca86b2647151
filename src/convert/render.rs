//! Restricted document HTML → plaintext dialect.
//!
//! A recursive per-tag projection over the parsed fragment. Inline styling is
//! deliberately dropped; only block structure, heading levels, and callout
//! kinds survive.

use crate::dom::{Dom, NodeData, NodeId, parse_fragment};
use crate::sanitize::callout_kind;

/// Inline wrappers whose text is promoted to the enclosing block context.
const INLINE_TAGS: &[&str] = &["span", "strong", "b", "em", "i", "u", "del", "s", "a"];

/// Convert restricted document HTML into the plaintext dialect.
///
/// # Examples
///
/// ```
/// use folio::to_plaintext;
///
/// let text = to_plaintext(r#"<div data-callout="warning"><p>Careful</p></div>"#);
/// assert_eq!(text, "::: warning\nCareful\n:::");
/// ```
pub fn to_plaintext(html: &str) -> String {
    let dom = parse_fragment(html);
    let mut blocks = Vec::new();
    collect_blocks(&dom, dom.container(), &mut blocks);
    blocks.retain(|b| !b.is_empty());
    blocks.join("\n\n")
}

/// Walk the children of `parent`, appending one string per derived block.
///
/// Bare text and inline wrappers encountered at block level accumulate into a
/// pending run that flushes as a paragraph when a block element (or the end
/// of the parent) arrives.
fn collect_blocks(dom: &Dom, parent: NodeId, out: &mut Vec<String>) {
    let mut pending = String::new();

    for child in dom.children(parent) {
        let Some(node) = dom.get(child) else {
            continue;
        };

        match &node.data {
            NodeData::Text(text) => pending.push_str(text),
            NodeData::Element { name, .. } => {
                let tag = name.local.as_ref();
                if INLINE_TAGS.contains(&tag) {
                    extract_raw(dom, child, &mut pending);
                    continue;
                }
                if tag == "br" {
                    // An inline break inside an open run; never a block.
                    if !pending.trim().is_empty() {
                        pending.push('\n');
                    }
                    continue;
                }

                flush_pending(&mut pending, out);

                match tag {
                    "h1" | "h2" | "h3" => {
                        let level = tag[1..].parse::<usize>().unwrap_or(1);
                        let text = inline_text(dom, child).replace('\n', " ");
                        out.push(format!("{} {}", "#".repeat(level), text));
                    }
                    "p" => {
                        let text = inline_text(dom, child);
                        if !text.is_empty() {
                            out.push(text);
                        }
                    }
                    "ul" => out.push(list_block(dom, child, false)),
                    "ol" => out.push(list_block(dom, child, true)),
                    "blockquote" => out.push(quote_block(dom, child)),
                    "hr" => out.push("---".to_string()),
                    "div" => {
                        if let Some(kind) = callout_kind(dom, child) {
                            out.push(callout_block(dom, child, &kind));
                        } else {
                            collect_blocks(dom, child, out);
                        }
                    }
                    // Unknown tags recurse without a marker of their own.
                    _ => collect_blocks(dom, child, out),
                }
            }
            _ => {}
        }
    }

    flush_pending(&mut pending, out);
}

fn flush_pending(pending: &mut String, out: &mut Vec<String>) {
    if pending.is_empty() {
        return;
    }
    let text = collapse_inline(pending);
    pending.clear();
    if !text.is_empty() {
        out.push(text);
    }
}

fn list_block(dom: &Dom, list: NodeId, ordered: bool) -> String {
    let mut lines = Vec::new();
    let mut counter = 0usize;

    for child in dom.children(list) {
        if dom.element_name(child).is_none_or(|n| n.as_ref() != "li") {
            continue;
        }
        let text = inline_text(dom, child).replace('\n', " ");
        counter += 1;
        if ordered {
            lines.push(format!("{}. {}", counter, text));
        } else {
            lines.push(format!("- {}", text));
        }
    }
    lines.join("\n")
}

/// Blockquote: paragraphs (split on blank-line runs of the concatenated
/// inline text) each rendered as `> ` lines, separated by a blank line.
fn quote_block(dom: &Dom, quote: NodeId) -> String {
    let mut raw = String::new();
    for child in dom.children(quote) {
        let is_block_child = dom
            .element_name(child)
            .is_some_and(|n| !INLINE_TAGS.contains(&n.as_ref()) && n.as_ref() != "br");
        if is_block_child && !raw.is_empty() {
            raw.push_str("\n\n");
        }
        extract_raw(dom, child, &mut raw);
        if is_block_child {
            raw.push_str("\n\n");
        }
    }

    let text = collapse_inline(&raw);
    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
        .iter()
        .map(|lines| {
            lines
                .iter()
                .map(|line| format!("> {}", line))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn callout_block(dom: &Dom, div: NodeId, kind: &str) -> String {
    let mut inner = Vec::new();
    collect_blocks(dom, div, &mut inner);
    inner.retain(|b| !b.is_empty());

    if inner.is_empty() {
        format!("::: {}\n:::", kind)
    } else {
        format!("::: {}\n{}\n:::", kind, inner.join("\n\n"))
    }
}

/// Collapsed inline text of a node: whitespace runs (including NBSP) become
/// single spaces, explicit `<br>` breaks survive as `\n`.
fn inline_text(dom: &Dom, id: NodeId) -> String {
    let mut raw = String::new();
    extract_raw(dom, id, &mut raw);
    collapse_inline(&raw)
}

/// Gather raw descendant text, mapping `<br>` to `\n`.
fn extract_raw(dom: &Dom, id: NodeId, out: &mut String) {
    let Some(node) = dom.get(id) else {
        return;
    };
    match &node.data {
        NodeData::Text(text) => out.push_str(text),
        NodeData::Element { name, .. } if name.local.as_ref() == "br" => out.push('\n'),
        NodeData::Element { .. } | NodeData::Document => {
            for child in dom.children(id) {
                extract_raw(dom, child, out);
            }
        }
        _ => {}
    }
}

/// Collapse whitespace within each line, keep `\n` boundaries, trim the ends.
fn collapse_inline(raw: &str) -> String {
    let lines: Vec<String> = raw
        .split('\n')
        .map(|segment| {
            segment
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    lines.join("\n").trim_matches('\n').trim().to_string()
}
