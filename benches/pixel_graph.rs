use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_seg::graph::PixelGraph;

mod common;

fn bench_pixel_graph_small(c: &mut Criterion) {
    let image = common::synthetic_image(100, 100);
    c.bench_function("pixel_graph_100x100", |b| {
        b.iter(|| PixelGraph::new(black_box(&image)))
    });
}

fn bench_pixel_graph_medium(c: &mut Criterion) {
    let image = common::synthetic_image(640, 480);
    c.bench_function("pixel_graph_640x480", |b| {
        b.iter(|| PixelGraph::new(black_box(&image)))
    });
}

criterion_group!(benches, bench_pixel_graph_small, bench_pixel_graph_medium);
criterion_main!(benches);
