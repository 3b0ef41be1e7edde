//! Numeric constants shared by the preprocessor and the reduction engine.

/// Smallest point count that forms a closed polygon.
pub const MIN_POINTS: usize = 3;

/// Folds the Gauss 1/4π normalization with the factor 2 from summing each
/// unordered pair once: `Wr = WRITHE_SCALE * Σ_{i<j} term(i, j)`.
pub const WRITHE_SCALE: f64 = 2.0 / (4.0 * std::f64::consts::PI);
