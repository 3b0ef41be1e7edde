//! Result formatting: fixed-significance text on stdout, JSON reports on disk.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use writhe::prelude::Point3;
use serde::Serialize;

use crate::provenance::{ensure_parent, write_sidecar, Payload};

/// Significant digits printed for the writhe.
pub const PRINT_DIGITS: usize = 14;

/// Format like C's `%.{digits}g`: shortest of fixed/scientific, trailing zeros trimmed.
/// Non-finite values print as `nan`, `inf`, `-inf`.
pub fn format_sig(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let digits = digits.max(1);
    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Summary written by `writhe --out`.
#[derive(Debug, Serialize)]
pub struct WritheReport {
    /// `null` in JSON when non-finite.
    pub writhe: f64,
    pub finite: bool,
    pub n_points: usize,
    pub threads: Option<usize>,
    pub reduction: String,
    pub elapsed_ms: f64,
}

/// Write `report` as pretty JSON to `out`, plus its provenance sidecar.
pub fn write_report(out: &Path, report: &WritheReport, payload: &Payload) -> Result<()> {
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "report written");
    Ok(())
}

/// Raw coordinate text, one point per line; round-trips through `input::parse_raw`.
pub fn write_raw<W: Write>(mut w: W, points: &[Point3<f64>]) -> Result<()> {
    for p in points {
        writeln!(w, "{} {} {}", p.x, p.y, p.z)?;
    }
    w.flush()?;
    Ok(())
}
