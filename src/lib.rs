//! # folio
//!
//! The rich text core of an ebook-assembly application: a constrained HTML
//! sanitizer, a bidirectional converter between the restricted document
//! model and a line-oriented plaintext dialect, and a pagination engine that
//! packs measured content blocks into fixed-height pages.
//!
//! ## Components
//!
//! - [`sanitize`]: reduce arbitrary HTML to the allow-listed vocabulary
//!   (headings 1-3, paragraphs, lists, blockquotes, rules, callouts, limited
//!   inline styling). Idempotent and total.
//! - [`to_plaintext`] / [`to_document_html`]: project the document model to
//!   the plaintext markup dialect and reconstitute it, for interop with the
//!   AI-assist text path.
//! - [`split_blocks`]: break assembled document HTML into the atomic blocks
//!   the paginator consumes.
//! - [`paginate`] and [`layout::Repaginator`]: pack blocks into pages under a
//!   height budget; the driver re-runs the pass on mount, content change,
//!   resize, and asset-load triggers.
//!
//! ## Quick Start
//!
//! ```
//! use folio::{sanitize, split_blocks, to_plaintext, paginate, Block, LayoutOptions};
//!
//! let clean = sanitize("<h2 class=\"x\">Title</h2><p>Body <script>x</script>text</p>");
//! assert_eq!(clean, "<h2>Title</h2><p>Body text</p>");
//!
//! let text = to_plaintext(&clean);
//! assert_eq!(text, "## Title\n\nBody text");
//!
//! let blocks = split_blocks(&clean);
//! assert_eq!(blocks.len(), 2);
//!
//! // Heights come from the caller's measurement surface.
//! let measured = [Block { id: 0, height: 120.0 }, Block { id: 1, height: 40.0 }];
//! let pages = paginate(&measured, &LayoutOptions::new(900.0));
//! assert_eq!(pages.len(), 1);
//! ```

pub mod convert;
pub mod dom;
pub mod error;
pub mod layout;
pub mod sanitize;
pub mod theme;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use convert::{split_blocks, to_document_html, to_plaintext};
pub use error::{Error, Result};
pub use layout::{Block, LayoutOptions, Page, paginate};
pub use sanitize::sanitize;
