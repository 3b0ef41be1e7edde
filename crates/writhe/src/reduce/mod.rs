//! Pairwise reduction engine: the O(N²) Gauss double sum over segment pairs.
//!
//! Purpose
//! - Evaluate `Σ_{i<j} (t_i × t_j) · r_ij / |r_ij|³` over the upper triangle of the
//!   pair matrix, fanned out over outer rows `i` with rayon.
//! - Fold each row's partial sum into the total exactly once
//!   (`Reduction::Ordered` or `Reduction::Locked`).
//! - Emit rate-limited progress through an injected `ProgressSink`, with timer
//!   state private to each worker.
//!
//! Numeric policy
//! - Coincident midpoints divide by zero; NaN/Inf propagate unguarded to the result.
//! - Summation order across rows depends on the strategy: `Ordered` is
//!   bit-reproducible for any worker count, `Locked` only up to rounding.

mod engine;
mod types;

pub use engine::{pairwise_sum, row_sum, writhe_from_segments};
pub use types::{LogProgress, NoProgress, ProgressClock, ProgressSink, Reduction, WritheCfg};
