//! Geometric invariances of the writhe, checked on seeded random Fourier curves.
//!
//! - Rigid motions and uniform scaling leave the writhe unchanged.
//! - Reversing the traversal leaves it unchanged; mirroring negates it.
//! - Worker count changes the value by rounding only.

use nalgebra::{Rotation3, Vector3};
use proptest::prelude::*;

use crate::curves::{fourier_knot, FourierCfg, ReplayToken};
use crate::geom3::Curve;
use crate::reduce::{NoProgress, Reduction, WritheCfg};
use crate::{compute_writhe, compute_writhe_with};

fn knot(seed: u64, n: usize) -> Curve {
    fourier_knot(n, FourierCfg::default(), ReplayToken { seed, index: 0 }).unwrap()
}

fn writhe(c: &Curve) -> f64 {
    compute_writhe(c.points(), None).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-8 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn translation_invariant(
        seed in any::<u64>(),
        n in 12usize..80,
        tx in -10.0..10.0f64,
        ty in -10.0..10.0f64,
        tz in -10.0..10.0f64,
    ) {
        let c = knot(seed, n);
        let w = writhe(&c);
        let wt = writhe(&c.translated(Vector3::new(tx, ty, tz)));
        prop_assert!(close(w, wt), "w={} wt={}", w, wt);
    }

    #[test]
    fn rotation_invariant(
        seed in any::<u64>(),
        n in 12usize..80,
        roll in -3.2..3.2f64,
        pitch in -1.5..1.5f64,
        yaw in -3.2..3.2f64,
    ) {
        let c = knot(seed, n);
        let rot = Rotation3::from_euler_angles(roll, pitch, yaw);
        let w = writhe(&c);
        let wr = writhe(&c.rotated(&rot));
        prop_assert!(close(w, wr), "w={} wr={}", w, wr);
    }

    #[test]
    fn scale_invariant(seed in any::<u64>(), n in 12usize..80, s in 0.05..20.0f64) {
        let c = knot(seed, n);
        let w = writhe(&c);
        let ws = writhe(&c.scaled(s));
        prop_assert!(close(w, ws), "w={} ws={}", w, ws);
    }

    #[test]
    fn reversal_invariant_mirror_negates(seed in any::<u64>(), n in 12usize..80) {
        let c = knot(seed, n);
        let w = writhe(&c);
        let wr = writhe(&c.reversed());
        prop_assert!(close(w, wr), "w={} reversed={}", w, wr);
        let wm = writhe(&c.mirrored_z());
        prop_assert_eq!(wm, -w);
    }

    #[test]
    fn worker_count_changes_rounding_only(
        seed in any::<u64>(),
        n in 12usize..200,
        threads in 1usize..6,
    ) {
        let c = knot(seed, n);
        let base = WritheCfg { threads: Some(1), ..WritheCfg::default() };
        let w1 = compute_writhe_with(c.points(), &base, &NoProgress).unwrap();
        let ordered = WritheCfg { threads: Some(threads), ..base };
        let wo = compute_writhe_with(c.points(), &ordered, &NoProgress).unwrap();
        prop_assert_eq!(w1.to_bits(), wo.to_bits());
        let locked = WritheCfg { reduction: Reduction::Locked, ..ordered };
        let wl = compute_writhe_with(c.points(), &locked, &NoProgress).unwrap();
        prop_assert!((wl - w1).abs() <= 1e-10 * (1.0 + w1.abs()), "w1={} locked={}", w1, wl);
    }
}

#[test]
fn scaled_trefoil_keeps_its_writhe() {
    let c = crate::curves::trefoil(240).unwrap();
    let w = writhe(&c);
    let big = writhe(&c.scaled(1.0e3));
    let small = writhe(&c.scaled(1.0e-3));
    assert!(close(w, big) && close(w, small), "w={w} big={big} small={small}");
}

#[test]
fn planar_curves_have_zero_writhe() {
    for n in [3usize, 4, 17, 256] {
        let c = crate::curves::regular_polygon(n, 1.5).unwrap();
        assert!(writhe(&c).abs() < 1e-9, "n={n}");
        // Tilted plane: still coplanar, now with rounding in every coordinate.
        let rot = Rotation3::from_euler_angles(0.3, -0.7, 1.1);
        assert!(writhe(&c.rotated(&rot)).abs() < 1e-9, "tilted n={n}");
    }
}
