//! WASM bindings for running the pipeline in the browser.
//!
//! Exposes the string-in/string-out core plus a heights-only pagination
//! helper via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::layout::{Block, LayoutOptions, paginate};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Sanitize an HTML string to the restricted document model.
#[wasm_bindgen]
pub fn sanitize_html(html: &str) -> String {
    crate::sanitize(html)
}

/// Project document HTML to the plaintext dialect.
#[wasm_bindgen]
pub fn html_to_text(html: &str) -> String {
    crate::to_plaintext(html)
}

/// Reconstitute plaintext dialect into document HTML.
#[wasm_bindgen]
pub fn text_to_html(text: &str) -> String {
    crate::to_document_html(text)
}

/// Stylesheet for page frames and callouts, for injection into the export
/// surface. Same string on every call.
#[wasm_bindgen]
pub fn page_stylesheet() -> String {
    crate::theme::page_stylesheet().to_string()
}

/// Pack measured block heights into pages; returns the number of blocks on
/// each page, in order. The caller maps counts back onto its block list.
#[wasm_bindgen]
pub fn paginate_heights(heights: &[f32], max_height: f32, inset: f32) -> Vec<u32> {
    let blocks: Vec<Block> = heights
        .iter()
        .enumerate()
        .map(|(i, &height)| Block {
            id: i as u32,
            height,
        })
        .collect();
    let opts = LayoutOptions::new(max_height).with_inset(inset);
    paginate(&blocks, &opts)
        .into_iter()
        .map(|page| page.blocks.len() as u32)
        .collect()
}
