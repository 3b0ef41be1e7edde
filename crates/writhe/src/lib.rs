//! Writhe of closed polygonal curves in R³.
//!
//! The writhe is evaluated with the discretized Gauss double integral over all
//! unordered pairs of segments:
//!
//! `Wr = (1/2π) Σ_{i<j} (t_i × t_j) · r_ij / |r_ij|³`, with `r_ij = m_i − m_j`,
//!
//! where `m_i` and `t_i` are the midpoint and raw displacement of segment `i`.
//!
//! Pipeline
//! - `segments`: per-segment midpoints and tangents (O(N)).
//! - `reduce`: parallel upper-triangle reduction over segment pairs (O(N²)).
//! - `api`: validated entry points (`compute_writhe`, `compute_writhe_with`).
//!
//! Only closed curves are supported; the last point connects back to the first.

pub mod api;
pub mod cfg;
pub mod curves;
pub mod error;
pub mod geom3;
pub mod reduce;
pub mod segments;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{compute_writhe, compute_writhe_with};
pub use error::WritheError;
pub use geom3::{AsPoint3, Curve};
pub use reduce::{LogProgress, NoProgress, ProgressSink, Reduction, WritheCfg};
pub use segments::Segments;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{compute_writhe, compute_writhe_with};
    pub use crate::curves::{
        figure_eight, fourier_knot, regular_polygon, torus_knot, trefoil, FourierCfg, ReplayToken,
    };
    pub use crate::geom3::{triple_product, AsPoint3, Curve};
    pub use crate::reduce::{LogProgress, NoProgress, ProgressSink, Reduction, WritheCfg};
    pub use crate::WritheError;
    pub use nalgebra::{Point3, Vector3};
}

#[cfg(test)]
mod tests_invariants;
