//! Performance measurement for image analysis at varying buffer sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use elanvir::analysis::{self, PixelGrid, palette};
use std::hint::black_box;

/// Synthetic gradient buffer with a wide color spread
fn gradient_grid(side: usize) -> PixelGrid {
    let mut grid = PixelGrid::filled(side, side, [0, 0, 0, 255]);
    for row in 0..side {
        for col in 0..side {
            grid.set_pixel(
                row,
                col,
                [
                    (row % 256) as u8,
                    (col % 256) as u8,
                    ((row + col) % 256) as u8,
                    255,
                ],
            );
        }
    }
    grid
}

/// Measures the full analysis cost as the buffer grows
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for side in &[64usize, 128, 256] {
        let grid = gradient_grid(*side);
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| black_box(analysis::analyze(black_box(&grid))));
        });
    }

    group.finish();
}

/// Measures palette bucketing alone, which runs at a pixel stride
fn bench_dominant_colors(c: &mut Criterion) {
    let mut group = c.benchmark_group("dominant_colors");

    for side in &[128usize, 512] {
        let grid = gradient_grid(*side);
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| black_box(palette::dominant_colors(black_box(&grid))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_dominant_colors);
criterion_main!(benches);
