//! Segment preprocessing: midpoints and raw tangents of a closed polygon.
//!
//! For segment `i` joining `p_i` to `p_{(i+1) mod N}`:
//! - `midpoints[i] = (p_i + p_{i+1}) / 2`
//! - `tangents[i]  =  p_{i+1} − p_i` (not normalized; its length is the
//!   differential element of the Gauss integral).
//!
//! Both buffers are contiguous, indexed by segment number, and read-only once
//! built, so the reduction engine shares them across workers without locking.

use nalgebra::{Point3, Vector3};

use crate::cfg::MIN_POINTS;
use crate::error::WritheError;
use crate::geom3::AsPoint3;

/// Per-segment geometry of a closed curve.
///
/// Invariants:
/// - `midpoints.len() == tangents.len() == N >= MIN_POINTS`.
#[derive(Clone, Debug, PartialEq)]
pub struct Segments {
    midpoints: Vec<Point3<f64>>,
    tangents: Vec<Vector3<f64>>,
}

impl Segments {
    /// Preprocess the closed curve `curve` in O(N).
    ///
    /// Pre: `curve.len() >= MIN_POINTS`; shorter input is rejected with
    /// `WritheError::TooFewPoints` instead of producing a meaningless result.
    pub fn from_closed_curve<P: AsPoint3>(curve: &[P]) -> Result<Self, WritheError> {
        let n = curve.len();
        if n < MIN_POINTS {
            return Err(WritheError::TooFewPoints { n });
        }
        let mut midpoints = Vec::with_capacity(n);
        let mut tangents = Vec::with_capacity(n);
        let first = curve[0].to_point3();
        let mut cur = first;
        for i in 0..n {
            let next = if i + 1 < n {
                curve[i + 1].to_point3()
            } else {
                first
            };
            midpoints.push(Point3::from((cur.coords + next.coords) * 0.5));
            tangents.push(next - cur);
            cur = next;
        }
        Ok(Self {
            midpoints,
            tangents,
        })
    }

    /// Number of segments (equals the number of curve points).
    #[inline]
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// Always false: construction rejects curves below `MIN_POINTS`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }

    #[inline]
    pub fn midpoints(&self) -> &[Point3<f64>] {
        &self.midpoints
    }

    #[inline]
    pub fn tangents(&self) -> &[Vector3<f64>] {
        &self.tangents
    }
}
