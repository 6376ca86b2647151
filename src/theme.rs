//! Export stylesheet, assembled once per process.
//!
//! The page renderer needs its stylesheet present exactly once no matter how
//! many export passes run; the `OnceLock` guard makes repeated calls cheap
//! and idempotent.

use std::sync::OnceLock;

/// Callout kinds with dedicated accent colors; anything else renders with the
/// `info` accent.
const CALLOUT_ACCENTS: &[(&str, &str)] = &[
    ("info", "#3b82f6"),
    ("tip", "#10b981"),
    ("warning", "#f59e0b"),
    ("danger", "#ef4444"),
];

static STYLESHEET: OnceLock<String> = OnceLock::new();

/// The page-frame and callout stylesheet. Safe to call repeatedly; always
/// returns the same string.
pub fn page_stylesheet() -> &'static str {
    STYLESHEET.get_or_init(build_stylesheet)
}

fn build_stylesheet() -> String {
    let mut css = String::from(
        ".folio-page {\n  position: relative;\n  overflow: hidden;\n  background: #ffffff;\n}\n\
         .folio-page [data-align=\"center\"] { text-align: center; }\n\
         .folio-page [data-align=\"right\"] { text-align: right; }\n\
         .folio-page [data-align=\"justify\"] { text-align: justify; }\n\
         .folio-page div[data-callout] {\n  border-left: 4px solid #3b82f6;\n  border-radius: 4px;\n  padding: 8px 12px;\n  background: rgba(59, 130, 246, 0.08);\n}\n",
    );
    for (kind, accent) in CALLOUT_ACCENTS {
        css.push_str(&format!(
            ".folio-page div[data-callout=\"{kind}\"] {{ border-left-color: {accent}; }}\n"
        ));
    }
    css
}
