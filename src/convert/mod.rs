//! Bidirectional transform between the restricted HTML document model and a
//! line-oriented plaintext markup dialect.
//!
//! The dialect is the wire contract of the AI-assist text path:
//!
//! | Marker | Meaning |
//! |---|---|
//! | `# ` / `## ` / `### ` | Heading 1-3 (intake recognizes `##`/`###` only) |
//! | `- text` / `* text` | Unordered list item |
//! | `N. text` | Ordered list item |
//! | `> text` | Blockquote line |
//! | `---` (3+ of `-`, `_`, or `*`) | Horizontal rule |
//! | `::: kind` ... `:::` | Callout block |
//! | blank line | Block separator |
//!
//! The projection is lossy by design: inline styling does not survive the
//! plaintext direction, only block structure and heading levels do.

mod intake;
mod render;
mod split;

pub use intake::to_document_html;
pub use render::to_plaintext;
pub use split::split_blocks;
