//! Error type for curve validation and engine setup.
//!
//! Numeric degeneracy (coincident segment midpoints) is deliberately absent:
//! it propagates as NaN/Inf through the returned writhe.

use std::fmt;

/// Failures surfaced before the pairwise reduction starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WritheError {
    /// The curve has fewer than `cfg::MIN_POINTS` points.
    TooFewPoints { n: usize },
    /// Coordinate row `index` has `dim` components instead of 3.
    BadDimension { index: usize, dim: usize },
    /// A dedicated worker pool could not be created.
    ThreadPool { reason: String },
}

impl WritheError {
    pub(crate) fn thread_pool(reason: impl Into<String>) -> Self {
        Self::ThreadPool {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for WritheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { n } => write!(
                f,
                "closed curve needs at least {} points, got {n}",
                crate::cfg::MIN_POINTS
            ),
            Self::BadDimension { index, dim } => write!(
                f,
                "point {index} has {dim} coordinates, expected 3"
            ),
            Self::ThreadPool { reason } => write!(f, "failed to build worker pool: {reason}"),
        }
    }
}

impl std::error::Error for WritheError {}
