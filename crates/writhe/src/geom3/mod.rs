//! 3D point capability, validated closed curves, and vector helpers.
//!
//! Purpose
//! - Accept any "indexable sequence of 3D points" through `AsPoint3`, so callers
//!   can pass `Point3`, `Vector3`, `[f64; 3]` or tuples without copying into a
//!   specific container first.
//! - Provide an owned `Curve` that has already passed the shape checks
//!   (N ≥ 3, three coordinates per point).
//!
//! Vectors are `nalgebra` types; cross/dot/norm come from nalgebra directly.

mod types;
mod util;

pub use types::{AsPoint3, Curve};
pub use util::triple_product;

#[cfg(test)]
mod tests;
