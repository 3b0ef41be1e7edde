//! `<report>.provenance.json` sidecars: which curve went in, with which settings, from
//! which build.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use writhe::Curve;

/// Shape of the input curve, enough to tell two runs' inputs apart at a glance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSummary {
    pub n_points: usize,
    /// Perimeter of the closed polygon, including the closing segment.
    pub length: f64,
    pub bbox_min: [f64; 3],
    pub bbox_max: [f64; 3],
}

impl CurveSummary {
    pub fn of(curve: &Curve) -> Self {
        let pts = curve.points();
        let mut bbox_min = [f64::INFINITY; 3];
        let mut bbox_max = [f64::NEG_INFINITY; 3];
        for p in pts {
            for d in 0..3 {
                bbox_min[d] = bbox_min[d].min(p[d]);
                bbox_max[d] = bbox_max[d].max(p[d]);
            }
        }
        let length = pts
            .iter()
            .zip(pts.iter().cycle().skip(1))
            .map(|(a, b)| (b - a).norm())
            .sum();
        Self {
            n_points: pts.len(),
            length,
            bbox_min,
            bbox_max,
        }
    }
}

/// What a writhe run consumed: the curve, where it came from, and the CLI settings.
pub struct Payload {
    source: String,
    curve: CurveSummary,
    params: Value,
}

impl Payload {
    /// `source == None` means the curve was read from stdin.
    pub fn new(source: Option<&Path>, curve: &Curve, params: Value) -> Self {
        Self {
            source: source.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string()),
            curve: CurveSummary::of(curve),
            params,
        }
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    tool: &'static str,
    version: &'static str,
    code_rev: String,
    report: String,
    source: &'a str,
    curve: &'a CurveSummary,
    params: &'a Value,
}

/// Write the sidecar for `report` and return its path.
pub fn write_sidecar(report: &Path, payload: &Payload) -> Result<PathBuf> {
    let path = provenance_path(report);
    ensure_parent(&path)?;
    let doc = Sidecar {
        tool: "calc_writhe",
        version: writhe::VERSION,
        code_rev: current_git_rev(),
        report: report.to_string_lossy().into_owned(),
        source: &payload.source,
        curve: &payload.curve,
        params: &payload.params,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display())),
        _ => Ok(()),
    }
}

/// `dir/w.json` -> `dir/w.provenance.json`.
fn provenance_path(report: &Path) -> PathBuf {
    let stem = report
        .file_stem()
        .map_or_else(|| "report".into(), |s| s.to_string_lossy());
    report.with_file_name(format!("{stem}.provenance.json"))
}

/// `$GIT_COMMIT` if set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
