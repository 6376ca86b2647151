//! Break assembled document HTML into top-level semantic blocks.
//!
//! This is the granularity the paginator consumes: each heading, paragraph,
//! list, blockquote, callout, or rule becomes one atomic block. Loose inline
//! runs between block elements are wrapped as a paragraph so nothing is lost.

use crate::dom::{Dom, NodeData, NodeId, parse_fragment, serialize_node};

/// Tags that form a block of their own at the top level.
const BLOCK_TAGS: &[&str] = &["p", "h1", "h2", "h3", "ul", "ol", "blockquote", "div", "hr"];

/// Split document HTML into per-block HTML strings, in document order.
///
/// # Examples
///
/// ```
/// use folio::split_blocks;
///
/// let blocks = split_blocks("<h2>Title</h2><p>Body</p>");
/// assert_eq!(blocks, ["<h2>Title</h2>", "<p>Body</p>"]);
/// ```
pub fn split_blocks(html: &str) -> Vec<String> {
    let dom = parse_fragment(html);
    let container = dom.container();

    let mut blocks = Vec::new();
    let mut pending = String::new();

    for child in dom.children(container) {
        let is_block = matches!(
            dom.get(child).map(|n| &n.data),
            Some(NodeData::Element { name, .. }) if BLOCK_TAGS.contains(&name.local.as_ref())
        );

        if is_block {
            flush_inline_run(&mut pending, &mut blocks);
            let mut out = String::new();
            serialize_node(&dom, child, &mut out);
            blocks.push(out);
        } else {
            collect_loose(&dom, child, &mut pending);
        }
    }
    flush_inline_run(&mut pending, &mut blocks);
    blocks
}

fn collect_loose(dom: &Dom, id: NodeId, pending: &mut String) {
    // Comments never reach the export path; skip them rather than carrying
    // them into a synthesized paragraph.
    if matches!(dom.get(id).map(|n| &n.data), Some(NodeData::Comment(_))) {
        return;
    }
    serialize_node(dom, id, pending);
}

fn flush_inline_run(pending: &mut String, blocks: &mut Vec<String>) {
    let run = pending.trim();
    if !run.is_empty() {
        blocks.push(format!("<p>{}</p>", run));
    }
    pending.clear();
}
