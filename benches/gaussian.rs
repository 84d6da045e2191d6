use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_seg::utils::gaussian::gaussian_smooth;

mod common;

fn bench_gaussian_medium(c: &mut Criterion) {
    let image = common::synthetic_image(640, 480);
    c.bench_function("gaussian_5x5_640x480", |b| {
        b.iter(|| gaussian_smooth(black_box(&image), black_box(5), black_box(0.8)))
    });
}

fn bench_gaussian_large(c: &mut Criterion) {
    let image = common::synthetic_image(1920, 1080);
    c.bench_function("gaussian_5x5_1920x1080", |b| {
        b.iter(|| gaussian_smooth(black_box(&image), black_box(5), black_box(0.8)))
    });
}

criterion_group!(benches, bench_gaussian_medium, bench_gaussian_large);
criterion_main!(benches);
