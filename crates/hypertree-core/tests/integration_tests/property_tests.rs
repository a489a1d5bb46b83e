//! Property-based invariants of the disk geometry.
//!
//! 1. Translation by `p` then `-p` is the identity
//! 2. `t.inverse()` undoes `t`
//! 3. `t1.compose(t2)` applies `t1` then `t2`
//! 4. The precomputed transform agrees with the general one
//! 5. Transforms preserve hyperbolic distance
//! 6. `e2h` and `h2e` are inverse
//! 7. Animations end exactly on their target
//! 8. Weighing keeps fixed weights and sums magnitudes

use hypertree_core::hyperbolic::{
    distance_to_origin_e2h, distance_to_origin_h2e, hyperbolic_distance,
};
use hypertree_core::{
    AnimationTransforms, Complex, ComplexExt, HyperOptimizedTransform, HyperRotation,
    HyperTransform, HyperTranslation, Transformer, Tree, Weigher,
};
use proptest::prelude::*;

const TOL: f64 = 1e-9;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_disk_point(max_norm: f64) -> impl Strategy<Value = Complex> {
    (0.0..std::f64::consts::TAU, 0.0..max_norm).prop_map(|(a, m)| Complex::polar(a, m))
}

fn arb_transform() -> impl Strategy<Value = HyperTransform> {
    (-std::f64::consts::PI..std::f64::consts::PI, arb_disk_point(0.9)).prop_map(|(angle, p)| {
        HyperTransform::new(HyperRotation::from_angle(angle), HyperTranslation::new(p))
    })
}

proptest! {
    #[test]
    fn translation_round_trip(z in arb_disk_point(0.95), p in arb_disk_point(0.9)) {
        let back = HyperTranslation::map(HyperTranslation::map(z, p), -p);
        prop_assert!(back.approx_eq(&z, TOL), "z={} back={}", z, back);
    }

    #[test]
    fn inverse_undoes_transform(t in arb_transform(), z in arb_disk_point(0.9)) {
        prop_assert!(t.inverse().map(t.map(z)).approx_eq(&z, 1e-8));
    }

    #[test]
    fn compose_applies_in_order(
        t1 in arb_transform(),
        t2 in arb_transform(),
        z in arb_disk_point(0.9),
    ) {
        let composed = t1.compose(&t2).map(z);
        let sequential = t2.map(t1.map(z));
        prop_assert!(composed.approx_eq(&sequential, 1e-7), "{} vs {}", composed, sequential);
    }

    #[test]
    fn optimized_matches_general(t in arb_transform(), z in arb_disk_point(0.95)) {
        let fast = HyperOptimizedTransform::new(&t);
        prop_assert!(fast.map(z).approx_eq(&t.map(z), TOL));
    }

    #[test]
    fn transforms_are_isometries(
        t in arb_transform(),
        a in arb_disk_point(0.8),
        b in arb_disk_point(0.8),
    ) {
        let before = hyperbolic_distance(a, b);
        let after = hyperbolic_distance(t.map(a), t.map(b));
        prop_assert!((before - after).abs() < 1e-6, "{} vs {}", before, after);
    }

    #[test]
    fn e2h_h2e_round_trip(e in 0.0f64..0.99, h in 0.0f64..8.0) {
        prop_assert!((distance_to_origin_h2e(distance_to_origin_e2h(e)) - e).abs() < TOL);
        prop_assert!((distance_to_origin_e2h(distance_to_origin_h2e(h)) - h).abs() < 1e-6);
    }

    #[test]
    fn animation_lands_on_target(
        from in arb_disk_point(0.9),
        to in arb_disk_point(0.5),
        steps in 0usize..20,
        preserve in any::<bool>(),
    ) {
        prop_assume!(hyperbolic_distance(from, to) > 1e-6);
        let transformer = Transformer::new(preserve);
        let frames = AnimationTransforms::make(from, to, &transformer, Complex::new(0.0, 0.0), steps)
            .expect("distinct points");
        let last = frames.last().expect("at least one frame");
        prop_assert!(last.map(from).approx_eq(&to, 1e-8));
    }

    #[test]
    fn weigher_sums_magnitudes(weights in prop::collection::vec(-5.0f64..5.0, 1..12)) {
        let mut tree = Tree::new("root");
        let root = tree.root();
        for (i, w) in weights.iter().enumerate() {
            let id = tree.add_child(root, format!("c{i}")).unwrap();
            tree[id].weight = *w;
        }
        Weigher::weigh(&mut tree, root);

        let expected: f64 = weights
            .iter()
            .map(|w| if *w < 0.0 { -w } else { 1.0 })
            .sum();
        prop_assert!((tree[root].children_weight() - expected).abs() < TOL);
        prop_assert!(tree[root].weight >= 1.0);
        for (i, &child) in tree[root].children().iter().enumerate() {
            if weights[i] < 0.0 {
                prop_assert_eq!(tree[child].weight, weights[i]);
            } else {
                prop_assert_eq!(tree[child].weight, 1.0);
            }
        }
    }
}
