//! Constrained HTML sanitizer.
//!
//! Reduces arbitrary HTML to the restricted document model: an allow-listed
//! tag vocabulary, a per-tag attribute permit list, and a five-property style
//! subset. Disallowed elements are unwrapped (their children survive in
//! place), except raw-text and embedded-content containers such as `script`
//! and `style`, which are removed with their contents. Disallowed attributes
//! are dropped and comments are removed. The
//! projection is total and idempotent: every input sanitizes, and sanitizing
//! twice equals sanitizing once.

mod clean;
mod policy;
mod style_attr;

use crate::dom::{parse_fragment, serialize_inner};

pub use policy::is_allowed_tag;

pub(crate) use clean::callout_kind;

/// Sanitize an HTML string to the restricted document model.
///
/// Never fails: malformed markup degrades through lenient parsing and
/// unwrap-based recovery, preserving text content.
///
/// # Examples
///
/// ```
/// use folio::sanitize;
///
/// let out = sanitize(r#"<p style="font-size:20px;color:red">Hi<script>alert(1)</script></p>"#);
/// assert_eq!(out, r#"<p style="font-size: 20px">Hi</p>"#);
/// ```
pub fn sanitize(html: &str) -> String {
    let mut dom = parse_fragment(html);
    let container = dom.container();
    clean::clean_children(&mut dom, container);
    serialize_inner(&dom, container)
}
