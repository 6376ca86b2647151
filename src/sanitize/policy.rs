//! Allow-list tables for the restricted document model.

/// Tags that survive sanitization.
pub const ALLOWED_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "ul", "ol", "li", "blockquote", "div", "span", "strong", "b", "em",
    "i", "u", "del", "a", "br", "hr",
];

/// Tags removed together with their contents. Everything here either holds
/// raw text the document model has no use for, or embeds external content.
pub const DROPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "title", "textarea", "iframe", "object", "embed",
];

/// Block-level tags that may carry `data-align`.
pub const BLOCK_TAGS: &[&str] = &["p", "h1", "h2", "h3", "div", "blockquote", "ul", "ol", "li"];

/// Tags that may carry a filtered `style` attribute.
pub const STYLABLE_TAGS: &[&str] = &["span", "p", "h1", "h2", "h3", "div"];

/// Accepted `data-align` / `text-align` keywords.
pub const ALIGN_KEYWORDS: &[&str] = &["left", "center", "right", "justify"];

/// Accepted `text-decoration` keywords.
pub const DECORATION_KEYWORDS: &[&str] = &["underline", "line-through", "none"];

/// CSS properties that survive style filtering.
pub const ALLOWED_STYLE_PROPS: &[&str] = &[
    "font-weight",
    "font-style",
    "font-size",
    "text-decoration",
    "text-align",
];

pub fn is_allowed_tag(tag: &str) -> bool {
    ALLOWED_TAGS.contains(&tag)
}

pub fn is_dropped_tag(tag: &str) -> bool {
    DROPPED_TAGS.contains(&tag)
}

pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

pub fn is_stylable_tag(tag: &str) -> bool {
    STYLABLE_TAGS.contains(&tag)
}

/// Pixel size for a legacy `<font size="...">` key. Unrecognized or absent
/// keys fall back to 16px.
pub fn font_size_px(size_key: Option<&str>) -> u32 {
    match size_key.map(str::trim) {
        Some("1") => 10,
        Some("2") => 13,
        Some("3") => 16,
        Some("4") => 18,
        Some("5") => 24,
        Some("6") => 32,
        Some("7") => 48,
        _ => 16,
    }
}

/// Check an anchor href for an accepted scheme: http(s) or mailto.
pub fn is_safe_href(href: &str) -> bool {
    let href = href.trim();
    let lower: String = href.chars().take(8).collect::<String>().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:")
}
