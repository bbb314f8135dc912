use criterion::{criterion_group, criterion_main, Criterion};

use asciisnap::rendering::encode_png;
use asciisnap::{FixedCellFont, SnapConfig, TextRasterizer};

// Run with:
//    cargo bench

fn sample_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("{:>4} | {}", i, "#".repeat(10 + i % 50)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bench: layout + paint with the fixed-cell face
fn bench_rasterize(c: &mut Criterion) {
    let r = TextRasterizer::new(FixedCellFont::default(), &SnapConfig::default());
    let text = sample_text(200);

    c.bench_function("rasterize_200_lines_opaque", |b| {
        b.iter(|| r.rasterize(&text, false).expect("rasterize"))
    });
    c.bench_function("rasterize_200_lines_transparent", |b| {
        b.iter(|| r.rasterize(&text, true).expect("rasterize"))
    });
}

/// Bench: PNG encoding of a rendered canvas
fn bench_encode(c: &mut Criterion) {
    let r = TextRasterizer::new(FixedCellFont::default(), &SnapConfig::default());
    let canvas = r.rasterize(&sample_text(200), true).expect("rasterize");

    c.bench_function("encode_png_200_lines", |b| {
        b.iter(|| encode_png(&canvas).expect("encode"))
    });
}

/// Bench: real outline font, when one is installed
fn bench_system_font(c: &mut Criterion) {
    let r = match TextRasterizer::with_system_font(&SnapConfig::default()) {
        Ok(r) => r,
        Err(_) => return,
    };
    let text = sample_text(50);
    c.bench_function("rasterize_50_lines_system_font", |b| {
        b.iter(|| r.rasterize(&text, false).expect("rasterize"))
    });
}

criterion_group!(benches, bench_rasterize, bench_encode, bench_system_font);
criterion_main!(benches);
