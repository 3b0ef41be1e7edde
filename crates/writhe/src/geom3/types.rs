//! Point capability and the owned closed-curve type.

use nalgebra::{Point3, Rotation3, Vector3};

use crate::cfg::MIN_POINTS;
use crate::error::WritheError;

/// Anything that can be read as a point in R³.
pub trait AsPoint3 {
    fn to_point3(&self) -> Point3<f64>;
}

impl AsPoint3 for Point3<f64> {
    #[inline]
    fn to_point3(&self) -> Point3<f64> {
        *self
    }
}

impl AsPoint3 for Vector3<f64> {
    #[inline]
    fn to_point3(&self) -> Point3<f64> {
        Point3::from(*self)
    }
}

impl AsPoint3 for [f64; 3] {
    #[inline]
    fn to_point3(&self) -> Point3<f64> {
        Point3::new(self[0], self[1], self[2])
    }
}

impl AsPoint3 for (f64, f64, f64) {
    #[inline]
    fn to_point3(&self) -> Point3<f64> {
        Point3::new(self.0, self.1, self.2)
    }
}

impl<P: AsPoint3 + ?Sized> AsPoint3 for &P {
    #[inline]
    fn to_point3(&self) -> Point3<f64> {
        (**self).to_point3()
    }
}

/// Closed polygonal curve: point `N-1` connects back to point `0`.
///
/// Invariants:
/// - At least `MIN_POINTS` points.
/// - Coordinates are not checked for finiteness; NaN/Inf propagate to the writhe.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    points: Vec<Point3<f64>>,
}

impl Curve {
    pub fn new(points: Vec<Point3<f64>>) -> Result<Self, WritheError> {
        if points.len() < MIN_POINTS {
            return Err(WritheError::TooFewPoints { n: points.len() });
        }
        Ok(Self { points })
    }

    pub fn from_points<P: AsPoint3>(points: &[P]) -> Result<Self, WritheError> {
        Self::new(points.iter().map(AsPoint3::to_point3).collect())
    }

    /// Build from untyped coordinate rows (e.g. parsed text), checking dimension first.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, WritheError> {
        let mut points = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match row.as_ref() {
                &[x, y, z] => points.push(Point3::new(x, y, z)),
                other => {
                    return Err(WritheError::BadDimension {
                        index,
                        dim: other.len(),
                    })
                }
            }
        }
        Self::new(points)
    }

    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }

    /// Same curve traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Apply `f` to every point. `f` must not change the point count, so the
    /// result stays a valid closed curve.
    pub fn map_points<F: Fn(&Point3<f64>) -> Point3<f64>>(&self, f: F) -> Self {
        Self {
            points: self.points.iter().map(f).collect(),
        }
    }

    pub fn translated(&self, t: Vector3<f64>) -> Self {
        self.map_points(|p| p + t)
    }

    /// Uniform scaling about the origin.
    pub fn scaled(&self, s: f64) -> Self {
        self.map_points(|p| Point3::from(p.coords * s))
    }

    pub fn rotated(&self, rot: &Rotation3<f64>) -> Self {
        self.map_points(|p| rot * p)
    }

    /// Reflection through the `z = 0` plane (orientation-reversing).
    pub fn mirrored_z(&self) -> Self {
        self.map_points(|p| Point3::new(p.x, p.y, -p.z))
    }
}

impl AsRef<[Point3<f64>]> for Curve {
    fn as_ref(&self) -> &[Point3<f64>] {
        &self.points
    }
}
