//! Benchmarks for the rich text pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use folio::{Block, LayoutOptions, paginate, sanitize, split_blocks, to_document_html, to_plaintext};

/// Build a messy chapter-sized document the way pasted content arrives:
/// legacy tags, junk attributes, and embedded script.
fn messy_chapter() -> String {
    let mut html = String::from("<div class=\"WordSection1\">");
    for i in 0..200 {
        html.push_str(&format!(
            "<p style=\"color:#333;font-size:18px\" class=\"MsoNormal\">Paragraph {i} with \
             <font size=\"4\">legacy sizing</font>, a <strike>revision</strike>, and a \
             <a href=\"https://example.com/{i}\" target=\"_blank\">link</a>.</p>"
        ));
        if i % 20 == 0 {
            html.push_str("<script>track()</script><h2>Section</h2>");
        }
    }
    html.push_str("</div>");
    html
}

fn clean_chapter() -> String {
    sanitize(&messy_chapter())
}

fn chapter_text() -> String {
    to_plaintext(&clean_chapter())
}

fn bench_sanitize(c: &mut Criterion) {
    let html = messy_chapter();
    c.bench_function("sanitize_chapter", |b| {
        b.iter(|| sanitize(&html));
    });
}

fn bench_sanitize_idempotent_pass(c: &mut Criterion) {
    // Re-sanitizing already-clean content is the editor's save path.
    let clean = clean_chapter();
    c.bench_function("sanitize_clean_chapter", |b| {
        b.iter(|| sanitize(&clean));
    });
}

fn bench_export(c: &mut Criterion) {
    let clean = clean_chapter();
    c.bench_function("html_to_plaintext", |b| {
        b.iter(|| to_plaintext(&clean));
    });
}

fn bench_intake(c: &mut Criterion) {
    let text = chapter_text();
    c.bench_function("plaintext_to_html", |b| {
        b.iter(|| to_document_html(&text));
    });
}

fn bench_split(c: &mut Criterion) {
    let clean = clean_chapter();
    c.bench_function("split_blocks", |b| {
        b.iter(|| split_blocks(&clean));
    });
}

fn bench_paginate(c: &mut Criterion) {
    let blocks: Vec<Block> = (0..2000)
        .map(|i| Block {
            id: i,
            height: 40.0 + (i % 17) as f32 * 25.0,
        })
        .collect();
    let opts = LayoutOptions::new(900.0).with_inset(32.0);
    c.bench_function("paginate_2000_blocks", |b| {
        b.iter(|| paginate(&blocks, &opts));
    });
}

criterion_group!(
    benches,
    bench_sanitize,
    bench_sanitize_idempotent_pass,
    bench_export,
    bench_intake,
    bench_split,
    bench_paginate
);
criterion_main!(benches);
