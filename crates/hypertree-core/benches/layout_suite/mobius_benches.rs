//! Mobius map throughput.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};

use hypertree_core::{
    Complex, HyperOptimizedTransform, HyperRotation, HyperTransform, HyperTranslation,
};

use super::config;
use super::generators::generate_disk_points;

pub fn bench_mobius_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("mobius_map");
    let t = HyperTransform::new(
        HyperRotation::from_angle(0.8),
        HyperTranslation::new(Complex::new(0.4, -0.3)),
    );
    let fast = HyperOptimizedTransform::new(&t);

    for &size in config::MAP_BATCH_SIZES {
        let points = generate_disk_points(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("general", size), &points, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .map(|&z| t.map(black_box(z)))
                    .fold(0.0, |acc, z| acc + z.re)
            })
        });
        group.bench_with_input(BenchmarkId::new("optimized", size), &points, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .map(|&z| fast.map(black_box(z)))
                    .fold(0.0, |acc, z| acc + z.re)
            })
        });
    }

    group.bench_function("compose", |b| b.iter(|| black_box(t).compose(black_box(&t))));

    group.finish();
}
