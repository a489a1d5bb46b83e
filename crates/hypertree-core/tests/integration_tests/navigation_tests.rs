//! Focus, pan and reset through `HyperView`.

use hypertree_core::hyperbolic::{hyperbolic_distance, ORIGIN};
use hypertree_core::{
    Complex, ComplexExt, HyperError, HyperView, NodeId, Orientation, Settings, Tree,
};

use crate::common::helpers::{assert_all_in_disk, assert_clean};

fn view(settings: Settings) -> HyperView {
    HyperView::new(Tree::balanced(3, 3), settings).expect("valid settings")
}

fn first_grandchild(view: &HyperView) -> NodeId {
    view.with_tree(|tree| {
        let child = tree[tree.root()].children()[0];
        tree[child].children()[0]
    })
}

#[test]
fn test_new_view_is_laid_out_and_mapped() {
    let v = view(Settings::default());
    v.with_tree(|tree| {
        assert_all_in_disk(tree);
        assert_clean(tree);
        assert_eq!(tree[tree.root()].location.hyper.center(), ORIGIN);
    });
    assert!(v.current_transform().is_identity());
}

#[test]
fn test_new_view_rejects_invalid_settings() {
    let settings = Settings {
        expansion: 2.0,
        ..Default::default()
    };
    let err = HyperView::new(Tree::new("root"), settings).err().expect("must fail");
    assert!(matches!(err, HyperError::InvalidConfig(_)));
}

#[test]
fn test_focus_brings_node_to_center() {
    for orientation in [Orientation::Radial, Orientation::North] {
        let v = view(Settings {
            orientation,
            ..Default::default()
        });
        let target = first_grandchild(&v);
        let frames: Vec<_> = v.focus(target).unwrap().expect("target is off-center").collect();
        assert!(!frames.is_empty());
        for frame in frames {
            v.apply(frame);
        }

        v.with_tree(|tree| {
            let center = tree[target].location.hyper.center();
            assert!(center.mag() < 1e-9, "{orientation}: {center}");
            assert!(!tree[target].location.hyper.is_border());
            assert_all_in_disk(tree);
            assert_clean(tree);
        });
        // focusing again has nothing to animate
        assert!(v.focus(target).unwrap().is_none());
    }
}

#[test]
fn test_focus_uses_configured_step_count() {
    let v = view(Settings {
        animation_steps: 9,
        ..Default::default()
    });
    let target = first_grandchild(&v);
    assert_eq!(v.focus(target).unwrap().unwrap().len(), 9);
}

#[test]
fn test_focus_unknown_node() {
    let v = view(Settings::default());
    assert!(matches!(
        v.focus(NodeId(10_000)),
        Err(HyperError::NodeNotFound(NodeId(10_000)))
    ));
}

#[test]
fn test_pan_moves_point_and_keeps_distances() {
    let v = view(Settings::default());
    let target = first_grandchild(&v);
    let (before, parent_before) = v.with_tree(|tree| {
        let parent = tree[target].parent().unwrap();
        (
            tree[target].location.hyper.center(),
            tree[parent].location.hyper.center(),
        )
    });
    let to = Complex::new(-0.2, 0.1);
    v.pan(before, to).unwrap();

    v.with_tree(|tree| {
        let parent = tree[target].parent().unwrap();
        let now = tree[target].location.hyper.center();
        assert!(now.approx_eq(&to, 1e-9));
        let d_before = hyperbolic_distance(before, parent_before);
        let d_after = hyperbolic_distance(now, tree[parent].location.hyper.center());
        assert!((d_before - d_after).abs() < 1e-7);
    });
}

#[test]
fn test_pan_rejects_points_outside_disk() {
    let v = view(Settings::default());
    let err = v.pan(Complex::new(1.2, 0.0), ORIGIN).unwrap_err();
    assert!(matches!(err, HyperError::PointOutsideDisk { .. }));
    assert!(v.current_transform().is_identity());
}

#[test]
fn test_reset_returns_to_layout() {
    let v = view(Settings::default());
    v.pan(Complex::new(0.3, 0.3), Complex::new(-0.4, 0.1)).unwrap();
    assert!(!v.current_transform().is_identity());

    v.reset();
    assert!(v.current_transform().is_identity());
    v.with_tree(|tree| {
        for (_, node) in tree.iter() {
            assert_eq!(node.location.hyper.center(), node.location.hyper.center0());
        }
        assert_clean(tree);
    });
}

#[test]
fn test_apply_settings_relayouts() {
    let v = view(Settings::default());
    v.pan(Complex::new(0.3, 0.0), ORIGIN).unwrap();

    let settings = Settings {
        orientation: Orientation::East,
        expansion: 0.4,
        ..Default::default()
    };
    v.apply_settings(settings.clone()).unwrap();

    assert_eq!(v.settings(), settings);
    assert!(v.current_transform().is_identity());
    v.with_tree(|tree| {
        for &child in tree[tree.root()].children() {
            assert!(tree[child].location.hyper.center().re > 0.0);
        }
    });
}

#[test]
fn test_apply_settings_rejects_invalid() {
    let v = view(Settings::default());
    let bad = Settings {
        sweep: 0.0,
        ..Default::default()
    };
    assert!(v.apply_settings(bad).is_err());
    assert_eq!(v.settings(), Settings::default());
}

#[test]
fn test_relayout_keeps_transform() {
    let v = view(Settings::default());
    v.pan(Complex::new(0.1, 0.4), ORIGIN).unwrap();
    let t = v.current_transform();
    assert_eq!(v.relayout(), v.with_tree(|tree| tree.len()));
    assert_eq!(v.current_transform(), t);
}
