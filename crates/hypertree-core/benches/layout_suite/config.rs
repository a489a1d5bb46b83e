//! Benchmark configuration constants.

#![allow(dead_code)]

/// (depth, branching) of the balanced trees laid out.
pub const BALANCED_SHAPES: &[(usize, usize)] = &[(4, 4), (6, 4), (8, 3)];

/// Node counts of the irregular trees laid out.
pub const IRREGULAR_SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Maximum children per node in irregular trees.
pub const IRREGULAR_MAX_CHILDREN: u32 = 8;

/// Batch sizes for Mobius map throughput.
pub const MAP_BATCH_SIZES: &[usize] = &[100, 10_000];
