//! The sanitization traversal.
//!
//! Depth-first over the parsed fragment. Each node's own cleanup happens
//! before its children are visited, because unwrapping reassigns children to
//! a new parent; each node is visited at most once per pass.

use log::trace;

use crate::dom::{Attribute, Dom, NodeData, NodeId};

use super::policy;
use super::style_attr::filter_style;

/// Clean every child of `parent` in place.
pub fn clean_children(dom: &mut Dom, parent: NodeId) {
    let mut cursor = dom.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);

    while cursor.is_some() {
        let next = dom.get(cursor).map(|n| n.next_sibling).unwrap_or(NodeId::NONE);

        match dom.get(cursor).map(|n| &n.data) {
            Some(NodeData::Comment(_)) => {
                dom.detach(cursor);
                cursor = next;
            }
            Some(NodeData::Element { name, .. }) => {
                let tag = name.local.as_ref().to_string();
                cursor = clean_element(dom, cursor, &tag, next);
            }
            // Text survives untouched; Document never appears as a child.
            _ => cursor = next,
        }
    }
}

/// Clean one element; returns the next node the parent loop should visit.
fn clean_element(dom: &mut Dom, id: NodeId, tag: &str, next: NodeId) -> NodeId {
    // Legacy alias rewrites come first so the allow-list sees canonical tags.
    let tag = match tag {
        "font" => {
            let px = policy::font_size_px(dom.attr(id, "size"));
            dom.rename_element(id, "span");
            dom.set_attrs(id, vec![Attribute::new("style", format!("font-size: {}px", px))]);
            "span"
        }
        "strike" | "s" => {
            dom.rename_element(id, "del");
            "del"
        }
        other => other,
    };

    if policy::is_dropped_tag(tag) {
        trace!("dropping <{tag}> with contents");
        dom.detach(id);
        return next;
    }

    if !policy::is_allowed_tag(tag) {
        trace!("unwrapping <{tag}>");
        let first_child = dom.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        dom.unwrap_node(id);
        // Spliced children take the unwrapped node's position and still need
        // their own visit.
        return if first_child.is_some() { first_child } else { next };
    }

    filter_attributes(dom, id, tag);
    clean_children(dom, id);
    next
}

/// Rebuild an element's attribute list from the permit table.
///
/// Survivors are emitted in a canonical order (href, rel, data-callout,
/// data-align, style) so repeated sanitization is byte-stable.
fn filter_attributes(dom: &mut Dom, id: NodeId, tag: &str) {
    let mut kept: Vec<Attribute> = Vec::new();

    let had_target = dom.attr(id, "target").is_some();

    if tag == "a" {
        if let Some(href) = dom.attr(id, "href")
            && policy::is_safe_href(href)
        {
            kept.push(Attribute::new("href", href));
        }
        if had_target {
            kept.push(Attribute::new("rel", "noopener noreferrer"));
        } else if let Some(rel) = dom.attr(id, "rel") {
            kept.push(Attribute::new("rel", rel));
        }
    }

    if tag == "div"
        && let Some(kind) = callout_kind(dom, id)
    {
        kept.push(Attribute::new("data-callout", kind));
    }

    if policy::is_block_tag(tag)
        && let Some(align) = dom.attr(id, "data-align")
    {
        let keyword = align.trim().to_ascii_lowercase();
        if policy::ALIGN_KEYWORDS.contains(&keyword.as_str()) {
            kept.push(Attribute::new("data-align", keyword));
        }
    }

    if policy::is_stylable_tag(tag)
        && let Some(style) = dom.attr(id, "style")
        && let Some(filtered) = filter_style(style)
    {
        kept.push(Attribute::new("style", filtered));
    }

    dom.set_attrs(id, kept);
}

/// Callout kind of a div: `data-callout` wins, then a `callout-<kind>` class,
/// then a bare `callout` class defaulting to `info`.
pub(crate) fn callout_kind(dom: &Dom, id: NodeId) -> Option<String> {
    if let Some(kind) = dom.attr(id, "data-callout") {
        let kind = kind.trim().to_ascii_lowercase();
        return Some(if kind.is_empty() { "info".to_string() } else { kind });
    }

    let classes = dom.attr(id, "class")?;
    let mut bare_callout = false;
    for class in classes.split_whitespace() {
        if let Some(kind) = class.strip_prefix("callout-") {
            if !kind.is_empty() {
                return Some(kind.to_ascii_lowercase());
            }
        } else if class == "callout" {
            bare_callout = true;
        }
    }
    bare_callout.then(|| "info".to_string())
}
