//! Entry points: closed curve in, writhe out.
//!
//! Contract
//! - Input: `N >= 3` points, implicitly closed. Shorter input returns
//!   `WritheError::TooFewPoints` before any work is done.
//! - Output: dimensionless writhe. Coincident segment midpoints yield NaN/Inf,
//!   detectable with `f64::is_finite`; no other numeric guard is applied.
//! - Memory: two O(N) buffers (midpoints, tangents), plus an O(N) row buffer
//!   for `Reduction::Ordered`.

use std::time::Duration;

use crate::error::WritheError;
use crate::geom3::AsPoint3;
use crate::reduce::{writhe_from_segments, LogProgress, ProgressSink, WritheCfg};
use crate::segments::Segments;

/// Writhe of the closed curve `curve` on rayon's global pool.
///
/// With `progress_interval` set, each worker emits a `tracing` progress event at
/// most once per interval.
pub fn compute_writhe<P: AsPoint3>(
    curve: &[P],
    progress_interval: Option<Duration>,
) -> Result<f64, WritheError> {
    let cfg = WritheCfg {
        progress_interval,
        ..WritheCfg::default()
    };
    compute_writhe_with(curve, &cfg, &LogProgress)
}

/// Writhe of the closed curve `curve` with explicit configuration and progress sink.
pub fn compute_writhe_with<P: AsPoint3, S: ProgressSink + ?Sized>(
    curve: &[P],
    cfg: &WritheCfg,
    sink: &S,
) -> Result<f64, WritheError> {
    let seg = Segments::from_closed_curve(curve)?;
    writhe_from_segments(&seg, cfg, sink)
}
