//! Upper-triangle pair sum with rayon fan-out over outer rows.

use std::sync::{Mutex, PoisonError};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::cfg::WRITHE_SCALE;
use crate::error::WritheError;
use crate::geom3::triple_product;
use crate::segments::Segments;

use super::types::{ProgressClock, ProgressSink, Reduction, WritheCfg};

/// Partial sum of row `i`: `Σ_{j>i} (t_i × t_j) · r_ij / |r_ij|³`.
///
/// Pre: `i < seg.len()`.
#[inline]
pub fn row_sum(seg: &Segments, i: usize) -> f64 {
    let mids = seg.midpoints();
    let tans = seg.tangents();
    let mi = mids[i];
    let ti = tans[i];
    let mut local = 0.0;
    for (mj, tj) in mids[i + 1..].iter().zip(&tans[i + 1..]) {
        let rij = mi - mj;
        let dist_sq = rij.norm_squared();
        let dist_cubed = dist_sq * dist_sq.sqrt();
        local += triple_product(&ti, tj, &rij) / dist_cubed;
    }
    local
}

/// Unnormalized pair sum `Σ_{i<j} term(i, j)` using the configured workers and
/// reduction strategy.
pub fn pairwise_sum<S: ProgressSink + ?Sized>(
    seg: &Segments,
    cfg: &WritheCfg,
    sink: &S,
) -> Result<f64, WritheError> {
    match cfg.threads {
        Some(0) => Err(WritheError::thread_pool("worker count must be at least 1")),
        Some(k) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(k)
                .build()
                .map_err(|e| WritheError::thread_pool(e.to_string()))?;
            Ok(pool.install(|| reduce_rows(seg, cfg, sink)))
        }
        None => Ok(reduce_rows(seg, cfg, sink)),
    }
}

/// Writhe of preprocessed segments: `pairwise_sum / 2π`.
pub fn writhe_from_segments<S: ProgressSink + ?Sized>(
    seg: &Segments,
    cfg: &WritheCfg,
    sink: &S,
) -> Result<f64, WritheError> {
    Ok(WRITHE_SCALE * pairwise_sum(seg, cfg, sink)?)
}

fn reduce_rows<S: ProgressSink + ?Sized>(seg: &Segments, cfg: &WritheCfg, sink: &S) -> f64 {
    let n = seg.len();
    let interval = cfg.progress_interval;
    match cfg.reduction {
        Reduction::Ordered => {
            let rows: Vec<f64> = (0..n)
                .into_par_iter()
                .map_init(
                    || ProgressClock::new(interval),
                    |clock, i| {
                        let local = row_sum(seg, i);
                        clock.tick(i + 1, n, sink);
                        local
                    },
                )
                .collect();
            rows.iter().fold(0.0, |acc, r| acc + r)
        }
        Reduction::Locked => {
            let total = Mutex::new(0.0_f64);
            (0..n).into_par_iter().for_each_init(
                || ProgressClock::new(interval),
                |clock, i| {
                    let local = row_sum(seg, i);
                    *total.lock().unwrap_or_else(PoisonError::into_inner) += local;
                    clock.tick(i + 1, n, sink);
                },
            );
            total.into_inner().unwrap_or_else(PoisonError::into_inner)
        }
    }
}
