//! Assertions over laid-out trees.

#![allow(dead_code)]

use hypertree_core::{ComplexExt, Tree};

pub const EPS: f64 = 1e-9;

/// Every attached node's current and layout centers are strictly inside the disk.
pub fn assert_all_in_disk(tree: &Tree) {
    for (id, node) in tree.iter() {
        let hc = &node.location.hyper;
        assert!(hc.center0().is_in_disk(), "{id} layout center {}", hc.center0());
        assert!(hc.center().abs2() <= 1.0, "{id} center {}", hc.center());
        assert!(
            (hc.dist() - hc.center().mag()).abs() < EPS,
            "{id} cached distance is stale"
        );
    }
}

/// No attached node is waiting for a Euclidean remap.
pub fn assert_clean(tree: &Tree) {
    for (id, node) in tree.iter() {
        assert!(!node.location.hyper.is_dirty(), "{id} is still dirty");
    }
}
