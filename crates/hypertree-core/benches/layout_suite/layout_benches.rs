//! Weigh + layout benchmarks.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput};

use hypertree_core::{LayerOut, Tree, Weigher};

use super::config;
use super::generators::generate_irregular_tree;

pub fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let layer_out = LayerOut::default();

    for &(depth, branching) in config::BALANCED_SHAPES {
        let tree = Tree::balanced(depth, branching);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("balanced", format!("{depth}x{branching}")),
            &tree,
            |b, tree| {
                b.iter_batched(
                    || tree.clone(),
                    |mut tree| {
                        let root = tree.root();
                        Weigher::weigh(&mut tree, root);
                        layer_out.layout(&mut tree, root)
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }

    for &size in config::IRREGULAR_SIZES {
        let tree = generate_irregular_tree(size, config::IRREGULAR_MAX_CHILDREN);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("irregular", size), &tree, |b, tree| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    let root = tree.root();
                    Weigher::weigh(&mut tree, root);
                    layer_out.layout(&mut tree, root)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}
