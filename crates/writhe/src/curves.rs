//! Sample closed curves used in tests, benchmarks and the CLI `sample` command.
//!
//! Purpose
//! - Provide small, explicit constructors with known writhe behaviour:
//!   - `regular_polygon`: planar, writhe exactly 0.
//!   - `figure_eight`: one crossing lifted by ±`lift`; writhe → 1 as `lift` → 0
//!     (≈ 0.971 for `lift = 0.02`, N = 400).
//!   - `trefoil`, `torus_knot`: nontrivial knots (standard trefoil ≈ −3.355).
//!   - `fourier_knot`: seeded random smooth closed curves for property tests.
//! - Every curve samples `t_k = 2πk/N`, `k = 0..N`, without repeating the first
//!   point; closure is implicit.

use std::f64::consts::TAU;

use nalgebra::{Point3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::WritheError;
use crate::geom3::Curve;

fn sample<F: Fn(f64) -> Point3<f64>>(n: usize, f: F) -> Result<Curve, WritheError> {
    Curve::new((0..n).map(|k| f(TAU * (k as f64) / (n as f64))).collect())
}

/// Regular `n`-gon of circumradius `radius` in the `z = 0` plane.
pub fn regular_polygon(n: usize, radius: f64) -> Result<Curve, WritheError> {
    sample(n, |t| Point3::new(radius * t.cos(), radius * t.sin(), 0.0))
}

/// Lemniscate-like figure eight `(sin t, sin t cos t, lift cos t)`.
///
/// The single crossing at the origin of the xy-projection is separated by
/// `2·lift` in z.
pub fn figure_eight(n: usize, lift: f64) -> Result<Curve, WritheError> {
    sample(n, |t| Point3::new(t.sin(), t.sin() * t.cos(), lift * t.cos()))
}

/// Standard trefoil `(sin t + 2 sin 2t, cos t − 2 cos 2t, −sin 3t)`.
pub fn trefoil(n: usize) -> Result<Curve, WritheError> {
    sample(n, |t| {
        Point3::new(
            t.sin() + 2.0 * (2.0 * t).sin(),
            t.cos() - 2.0 * (2.0 * t).cos(),
            -(3.0 * t).sin(),
        )
    })
}

/// `(p, q)` torus curve on the torus with radii `major > minor > 0`:
/// `((R + r cos qt) cos pt, (R + r cos qt) sin pt, r sin qt)`.
pub fn torus_knot(
    p: u32,
    q: u32,
    n: usize,
    major: f64,
    minor: f64,
) -> Result<Curve, WritheError> {
    let (p, q) = (p as f64, q as f64);
    sample(n, |t| {
        let rho = major + minor * (q * t).cos();
        Point3::new(rho * (p * t).cos(), rho * (p * t).sin(), minor * (q * t).sin())
    })
}

/// Random Fourier curve configuration.
#[derive(Clone, Copy, Debug)]
pub struct FourierCfg {
    /// Number of harmonics per coordinate.
    pub modes: usize,
    /// Harmonic `k` coefficients are drawn from `U(-1, 1) / k^decay`.
    pub decay: f64,
}

impl Default for FourierCfg {
    fn default() -> Self {
        Self {
            modes: 3,
            decay: 1.0,
        }
    }
}

/// Replay token making random curves reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Smooth random closed curve `c(t) = Σ_k (a_k cos kt + b_k sin kt) / k^decay`.
pub fn fourier_knot(n: usize, cfg: FourierCfg, tok: ReplayToken) -> Result<Curve, WritheError> {
    let mut rng = tok.to_std_rng();
    let modes = cfg.modes.max(1);
    let mut unit = || {
        Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
    };
    let coeffs: Vec<(f64, Vector3<f64>, Vector3<f64>)> = (1..=modes)
        .map(|k| {
            let w = (k as f64).powf(-cfg.decay);
            (k as f64, unit() * w, unit() * w)
        })
        .collect();
    sample(n, |t| {
        let c = coeffs
            .iter()
            .fold(Vector3::<f64>::zeros(), |acc, (k, a, b)| {
                acc + a * (k * t).cos() + b * (k * t).sin()
            });
        Point3::from(c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_do_not_repeat_first_point() {
        let c = regular_polygon(6, 2.0).unwrap();
        assert_eq!(c.points().len(), 6);
        let last = c.points()[5];
        assert!((last - Point3::new(1.0, -(3.0f64).sqrt(), 0.0)).norm() < 1e-12);
    }

    #[test]
    fn too_few_samples_are_rejected() {
        assert_eq!(trefoil(2).unwrap_err(), WritheError::TooFewPoints { n: 2 });
    }

    #[test]
    fn torus_knot_stays_on_torus() {
        let c = torus_knot(2, 3, 60, 2.0, 0.5).unwrap();
        for p in c.points() {
            let rho = (p.x * p.x + p.y * p.y).sqrt();
            let tube = ((rho - 2.0).powi(2) + p.z * p.z).sqrt();
            assert!((tube - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn fourier_knot_is_replayable() {
        let tok = ReplayToken { seed: 11, index: 3 };
        let a = fourier_knot(50, FourierCfg::default(), tok).unwrap();
        let b = fourier_knot(50, FourierCfg::default(), tok).unwrap();
        assert_eq!(a, b);
        let other = ReplayToken { seed: 11, index: 4 };
        let c = fourier_knot(50, FourierCfg::default(), other).unwrap();
        assert_ne!(a, c);
    }
}
