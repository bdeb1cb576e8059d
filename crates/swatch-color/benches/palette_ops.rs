//! Criterion benchmarks for `swatch-color`.
//!
//! The editor regenerates palettes and contrast tables on every picker
//! move, so these are the hot paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swatch_color::{contrast, generate_palette, oklch_to_rgb, palette_contrast, OklchColor, RgbColor};

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    for (name, base) in [
        ("mid_blue", OklchColor::new(60.0, 0.18, 262.0)),
        ("light_yellow", OklchColor::new(92.0, 0.15, 100.0)),
        ("dark_red", OklchColor::new(25.0, 0.2, 25.0)),
        ("neutral", OklchColor::new(55.0, 0.0, 0.0)),
    ] {
        group.bench_with_input(BenchmarkId::new("generate", name), &base, |b, &base| {
            b.iter(|| black_box(generate_palette(black_box(base))));
        });

        let palette = generate_palette(base);
        group.bench_with_input(
            BenchmarkId::new("contrast_vs_white", name),
            &palette,
            |b, palette| {
                b.iter(|| black_box(palette_contrast(black_box(palette), RgbColor::WHITE)));
            },
        );
    }

    group.finish();
}

fn bench_conversion(c: &mut Criterion) {
    let color = OklchColor::new(60.0, 0.18, 262.0);
    c.bench_function("oklch_to_rgb", |b| {
        b.iter(|| black_box(oklch_to_rgb(black_box(color))));
    });
    c.bench_function("contrast", |b| {
        b.iter(|| black_box(contrast(black_box(RgbColor::new(30, 60, 90)), RgbColor::WHITE)));
    });
}

criterion_group!(benches, bench_palette, bench_conversion);
criterion_main!(benches);
