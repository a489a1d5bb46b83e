//! Deterministic fixtures.

#![allow(dead_code)]

use hypertree_core::{Complex, ComplexExt, Tree};

/// Simple LCG for reproducible pseudo-random data.
#[inline]
pub fn deterministic_hash(seed: u32) -> u32 {
    seed.wrapping_mul(1103515245).wrapping_add(12345)
}

/// Deterministic value in `[0, 1)`.
#[inline]
pub fn deterministic_float(seed: u32) -> f64 {
    ((deterministic_hash(seed) >> 16) & 0x7FFF) as f64 / 32768.0
}

/// Deterministic point of the disk with `|z| <= max_norm`.
pub fn disk_point(seed: u32, max_norm: f64) -> Complex {
    let angle = deterministic_float(seed) * std::f64::consts::TAU;
    let mag = deterministic_float(seed.wrapping_add(7919)) * max_norm;
    Complex::polar(angle, mag)
}

/// Irregular tree: node `i` gets `1 + hash(i) % max_children` children
/// until `size` nodes exist, breadth first.
pub fn irregular_tree(size: usize, max_children: u32) -> Tree {
    let mut tree = Tree::new("root");
    let mut queue = std::collections::VecDeque::from([tree.root()]);
    let mut seed = 1u32;
    while let Some(parent) = queue.pop_front() {
        let n = 1 + deterministic_hash(seed) % max_children;
        seed += 1;
        for k in 0..n {
            if tree.len() >= size {
                return tree;
            }
            let label = format!("{}.{k}", tree[parent].label);
            let child = tree.add_child(parent, label).expect("parent is attached");
            queue.push_back(child);
        }
    }
    tree
}

/// Root with one heavy subtree and several leaves.
pub fn lopsided_tree() -> Tree {
    let mut tree = Tree::new("root");
    let root = tree.root();
    let heavy = tree.add_child(root, "heavy").unwrap();
    for i in 0..12 {
        let mid = tree.add_child(heavy, format!("heavy.{i}")).unwrap();
        for j in 0..3 {
            tree.add_child(mid, format!("heavy.{i}.{j}")).unwrap();
        }
    }
    for i in 0..3 {
        tree.add_child(root, format!("leaf.{i}")).unwrap();
    }
    tree
}
