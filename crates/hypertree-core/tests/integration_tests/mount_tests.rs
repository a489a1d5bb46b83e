//! Graft and prune through `HyperView`.

use hypertree_core::hyperbolic::hyperbolic_distance;
use hypertree_core::{ComplexExt, HyperError, HyperView, MountPoint, NodeId, Settings, Tree};

use crate::common::helpers::{assert_all_in_disk, assert_clean};

/// Root with three children, the last one a mount point.
fn mountable() -> (Tree, NodeId) {
    let mut tree = Tree::new("root");
    let root = tree.root();
    tree.add_child(root, "a").unwrap();
    tree.add_child(root, "b").unwrap();
    let lazy = tree.add_child(root, "lazy").unwrap();
    tree.set_mounting(lazy, "file:lazy.json").unwrap();
    (tree, lazy)
}

fn loaded_subtree() -> Tree {
    let mut sub = Tree::new("loaded");
    let r = sub.root();
    for i in 0..4 {
        let c = sub.add_child(r, format!("loaded.{i}")).unwrap();
        sub.add_child(c, format!("loaded.{i}.0")).unwrap();
    }
    sub
}

#[test]
fn test_graft_lays_out_in_recorded_wedge() {
    let (tree, lazy) = mountable();
    let view = HyperView::new(tree, Settings::default()).unwrap();

    let (lazy_center, half_wedge, orientation) = view.with_tree(|tree| {
        match tree[lazy].mount_point() {
            Some(MountPoint::Mounting {
                half_wedge,
                orientation,
                ..
            }) => (tree[lazy].location.hyper.center0(), *half_wedge, *orientation),
            other => panic!("expected mounting point, got {other:?}"),
        }
    });
    assert!(half_wedge > 0.0);

    let grafted = view.graft(lazy, loaded_subtree()).unwrap();

    view.with_tree(|tree| {
        assert_all_in_disk(tree);
        assert_clean(tree);
        assert!(!tree[lazy].is_attached());
        assert_eq!(tree[grafted].location.hyper.center0(), lazy_center);
        assert_eq!(tree.preorder(tree.root()).len(), 1 + 2 + 1 + 8);

        // grafted children sit in the wedge given to the mount point
        let here = lazy_center;
        for &child in tree[grafted].children() {
            let c = tree[child].location.hyper.center0();
            let seen = hypertree_core::HyperTranslation::map(c, -here).arg();
            let offset = (seen - orientation + std::f64::consts::PI)
                .rem_euclid(std::f64::consts::TAU)
                - std::f64::consts::PI;
            assert!(offset.abs() <= half_wedge + 1e-9, "offset {offset} > {half_wedge}");
            assert!(hyperbolic_distance(here, c) > 0.0);
        }
    });
}

#[test]
fn test_prune_restores_mount_point() {
    let (tree, lazy) = mountable();
    let view = HyperView::new(tree, Settings::default()).unwrap();
    let grafted = view.graft(lazy, loaded_subtree()).unwrap();

    let restored = view.prune(grafted).unwrap();
    assert_eq!(restored, lazy);
    view.with_tree(|tree| {
        assert!(tree[lazy].is_attached());
        assert!(!tree[grafted].is_attached());
        assert_eq!(tree.preorder(tree.root()).len(), 4);
        assert_clean(tree);
    });
}

#[test]
fn test_prune_after_relayout_matches_fresh_layout() {
    let (tree, lazy) = mountable();
    let fresh = HyperView::new(tree.clone(), Settings::default()).unwrap();
    let expected: Vec<_> = fresh.with_tree(|tree| {
        tree.iter()
            .map(|(id, node)| (id, node.weight, node.location.hyper.center0()))
            .collect()
    });

    let view = HyperView::new(tree, Settings::default()).unwrap();
    let grafted = view.graft(lazy, loaded_subtree()).unwrap();
    view.relayout();
    view.prune(grafted).unwrap();

    view.with_tree(|tree| {
        for (id, weight, center0) in expected {
            let node = &tree[id];
            assert!((node.weight - weight).abs() < 1e-12, "{id} weight {}", node.weight);
            let c = node.location.hyper.center0();
            assert!(c.approx_eq(&center0, 1e-12), "{id} at {c}, fresh layout {center0}");
        }
        assert_clean(tree);
    });
}

#[test]
fn test_relayout_after_graft_counts_grafted_nodes() {
    let (tree, lazy) = mountable();
    let view = HyperView::new(tree, Settings::default()).unwrap();
    view.graft(lazy, loaded_subtree()).unwrap();
    assert_eq!(view.relayout(), 1 + 2 + 1 + 8);
}

#[test]
fn test_graft_rejects_plain_node() {
    let (tree, _) = mountable();
    let view = HyperView::new(tree, Settings::default()).unwrap();
    let plain = view.with_tree(|tree| tree[tree.root()].children()[0]);
    let err = view.graft(plain, loaded_subtree()).unwrap_err();
    assert!(matches!(err, HyperError::InvalidMount { node, .. } if node == plain));
}

#[test]
fn test_prune_rejects_unmounted_node() {
    let (tree, lazy) = mountable();
    let view = HyperView::new(tree, Settings::default()).unwrap();
    assert!(view.prune(lazy).is_err());
}

#[test]
fn test_focus_on_replaced_mount_point_is_not_found() {
    let (tree, lazy) = mountable();
    let view = HyperView::new(tree, Settings::default()).unwrap();
    view.graft(lazy, loaded_subtree()).unwrap();
    assert!(matches!(view.focus(lazy), Err(HyperError::NodeNotFound(id)) if id == lazy));
}
