use super::*;
use crate::error::WritheError;
use nalgebra::{vector, Point3, Rotation3, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn triple_product_matches_cross_dot() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut v = || {
        Vector3::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        )
    };
    for _ in 0..32 {
        let (a, b, c) = (v(), v(), v());
        let expected = a.cross(&b).dot(&c);
        assert!((triple_product(&a, &b, &c) - expected).abs() < 1e-12);
    }
}

#[test]
fn triple_product_axes() {
    let x = vector![1.0, 0.0, 0.0];
    let y = vector![0.0, 1.0, 0.0];
    let z = vector![0.0, 0.0, 1.0];
    assert_eq!(triple_product(&x, &y, &z), 1.0);
    assert_eq!(triple_product(&y, &x, &z), -1.0);
    assert_eq!(triple_product(&x, &x, &z), 0.0);
}

#[test]
fn curve_rejects_short_input() {
    let two = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
    assert_eq!(
        Curve::from_points(&two),
        Err(WritheError::TooFewPoints { n: 2 })
    );
    let empty: Vec<Point3<f64>> = Vec::new();
    assert_eq!(Curve::new(empty), Err(WritheError::TooFewPoints { n: 0 }));
}

#[test]
fn curve_from_rows_checks_dimension_before_count() {
    let rows = vec![vec![0.0, 0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0, 0.0]];
    assert_eq!(
        Curve::from_rows(&rows),
        Err(WritheError::BadDimension { index: 1, dim: 2 })
    );
    let rows = vec![vec![0.0, 0.0, 0.0, 1.0]];
    assert_eq!(
        Curve::from_rows(&rows),
        Err(WritheError::BadDimension { index: 0, dim: 4 })
    );
    let rows = vec![vec![0.0, 0.0, 0.0], vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]];
    let c = Curve::from_rows(&rows).unwrap();
    assert_eq!(c.points()[2], Point3::new(0.0, 1.0, 0.0));
}

#[test]
fn point_capability_covers_common_shapes() {
    let p = Point3::new(1.0, 2.0, 3.0);
    assert_eq!([1.0, 2.0, 3.0].to_point3(), p);
    assert_eq!((1.0, 2.0, 3.0).to_point3(), p);
    assert_eq!(Vector3::new(1.0, 2.0, 3.0).to_point3(), p);
    assert_eq!((&p).to_point3(), p);
}

#[test]
fn transforms_keep_point_count_and_order() {
    let c = Curve::from_points(&[[0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 2.0]]).unwrap();
    let r = c.reversed();
    assert_eq!(r.points()[0], c.points()[2]);
    assert_eq!(r.reversed(), c);

    let t = c.translated(vector![1.0, -1.0, 0.5]);
    assert_eq!(t.points()[1], Point3::new(2.0, -1.0, 1.5));

    let s = c.scaled(2.0);
    assert_eq!(s.points()[2], Point3::new(0.0, 2.0, 4.0));

    let m = c.mirrored_z();
    assert_eq!(m.points()[1], Point3::new(1.0, 0.0, -1.0));

    let rot = Rotation3::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2);
    let q = c.rotated(&rot).points()[1];
    assert!((q - Point3::new(0.0, 1.0, 1.0)).norm() < 1e-12);
}
