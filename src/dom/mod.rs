//! Arena-backed HTML fragment model.
//!
//! The sanitizer and the HTML-consuming converter direction both need a tree
//! they can mutate and re-serialize. html5ever parses into this arena via the
//! [`tree_sink`] adapter; all nodes live in one contiguous vector and link to
//! each other by index, so structural edits (unwrap, detach) are pointer
//! surgery on `u32` ids rather than `Rc` juggling.

mod serialize;
mod tree_sink;

pub use serialize::{escape_attr, escape_text, serialize_inner, serialize_node};

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, QualName, ns, parse_document};

use tree_sink::FragmentSink;

/// Identifier of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no node".
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_some(self) -> bool {
        self.0 != u32::MAX
    }

    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// An HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

impl Attribute {
    /// Build an attribute in the default (null) namespace.
    pub fn new(local: &str, value: impl Into<String>) -> Self {
        Self {
            name: QualName::new(None, ns!(), LocalName::from(local)),
            value: value.into(),
        }
    }
}

/// Payload of an arena node.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Synthetic document root.
    Document,
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
    },
    Text(String),
    Comment(String),
}

/// A node in the arena. Links are indices; `NodeId::NONE` means absent.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// Arena-backed DOM fragment.
///
/// Detached nodes are never reclaimed within a parse; the arena is transient
/// and dropped wholesale once the caller has serialized its output.
pub struct Dom {
    nodes: Vec<Node>,
    document: NodeId,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    /// Create an empty DOM with a document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
        };
        dom.document = dom.alloc(Node::new(NodeData::Document));
        dom
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn document(&self) -> NodeId {
        self.document
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        self.alloc(Node::new(NodeData::Element { name, attrs }))
    }

    /// Create an element by local name in the HTML namespace conventions used
    /// throughout this crate (null-namespace qualified name).
    pub fn create_named_element(&mut self, local: &str) -> NodeId {
        let name = QualName::new(None, ns!(), LocalName::from(local));
        self.create_element(name, Vec::new())
    }

    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text)))
    }

    pub fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(text)))
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);

        let last = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(c) = self.get_mut(child) {
            c.parent = parent;
            c.prev_sibling = last;
        }
        if last.is_some() {
            if let Some(prev) = self.get_mut(last) {
                prev.next_sibling = child;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = child;
        }
        if let Some(p) = self.get_mut(parent) {
            p.last_child = child;
        }
    }

    /// Append text to `parent`, merging with a trailing text node if present.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);
        if let Some(node) = self.get_mut(last)
            && let NodeData::Text(existing) = &mut node.data
        {
            existing.push_str(text);
            return;
        }
        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Insert `node` immediately before `sibling`.
    pub fn insert_before(&mut self, sibling: NodeId, node: NodeId) {
        self.detach(node);

        let (parent, prev) = match self.get(sibling) {
            Some(s) => (s.parent, s.prev_sibling),
            None => return,
        };

        if let Some(n) = self.get_mut(node) {
            n.parent = parent;
            n.prev_sibling = prev;
            n.next_sibling = sibling;
        }
        if let Some(s) = self.get_mut(sibling) {
            s.prev_sibling = node;
        }
        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = node;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = node;
        }
    }

    /// Unlink a node from its parent and siblings. The node keeps its own
    /// children and remains allocated in the arena.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = match self.get(id) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if parent.is_some()
            && let Some(p) = self.get_mut(parent)
        {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if parent.is_some()
            && let Some(p) = self.get_mut(parent)
        {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Splice a node's children into its parent at the node's position, then
    /// detach the (now childless) node. This is the sanitizer's "unwrap".
    pub fn unwrap_node(&mut self, id: NodeId) {
        let children: Vec<NodeId> = self.children(id).collect();
        for child in children {
            self.insert_before(id, child);
        }
        self.detach(id);
    }

    /// Detach and return all children of a node, preserving order.
    pub fn take_children(&mut self, id: NodeId) -> Vec<NodeId> {
        let children: Vec<NodeId> = self.children(id).collect();
        for &child in &children {
            self.detach(child);
        }
        children
    }

    /// Iterate over the children of a node.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            dom: self,
            next: self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// Local tag name of an element node, if it is one.
    pub fn element_name(&self, id: NodeId) -> Option<&LocalName> {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Element { name, .. }) => Some(&name.local),
            _ => None,
        }
    }

    /// Value of an attribute by local name.
    pub fn attr(&self, id: NodeId, local: &str) -> Option<&str> {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Element { attrs, .. }) => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == local)
                .map(|a| a.value.as_str()),
            _ => None,
        }
    }

    /// Replace an element's attribute list wholesale.
    pub fn set_attrs(&mut self, id: NodeId, new_attrs: Vec<Attribute>) {
        if let Some(node) = self.get_mut(id)
            && let NodeData::Element { attrs, .. } = &mut node.data
        {
            *attrs = new_attrs;
        }
    }

    /// Rename an element in place, keeping children and position.
    pub fn rename_element(&mut self, id: NodeId, local: &str) {
        if let Some(node) = self.get_mut(id)
            && let NodeData::Element { name, .. } = &mut node.data
        {
            *name = QualName::new(None, ns!(), LocalName::from(local));
        }
    }

    /// Text content of a text node.
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Depth-first search for the first element with the given local name.
    pub fn find_by_tag(&self, local: &str) -> Option<NodeId> {
        self.find_by_tag_from(self.document, local)
    }

    fn find_by_tag_from(&self, id: NodeId, local: &str) -> Option<NodeId> {
        if self.element_name(id).is_some_and(|n| n.as_ref() == local) {
            return Some(id);
        }
        let mut child = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        while child.is_some() {
            if let Some(found) = self.find_by_tag_from(child, local) {
                return Some(found);
            }
            child = self.get(child).map(|n| n.next_sibling).unwrap_or(NodeId::NONE);
        }
        None
    }

    /// The fragment container: the `<body>` synthesized during parsing, or
    /// the document root if no body exists (empty input).
    pub fn container(&self) -> NodeId {
        self.find_by_tag("body").unwrap_or(self.document)
    }
}

/// Iterator over a node's children.
pub struct Children<'a> {
    dom: &'a Dom,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }
        let current = self.next;
        self.next = self
            .dom
            .get(current)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(current)
    }
}

/// Parse an HTML fragment into a [`Dom`].
///
/// The input is wrapped in a minimal document so html5ever's document parser
/// can be used directly; the caller addresses the content through
/// [`Dom::container`]. Parsing is lenient: malformed markup produces a best
/// effort tree, never an error.
pub fn parse_fragment(html: &str) -> Dom {
    let wrapped = format!("<!DOCTYPE html><html><head></head><body>{}</body></html>", html);
    let sink = FragmentSink::new();
    let result = parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(wrapped.as_bytes());
    result.into_dom()
}
