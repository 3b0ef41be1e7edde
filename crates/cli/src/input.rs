//! Coordinate readers: raw whitespace text, CSV and parquet tables.
//!
//! All readers return untyped rows; `writhe::Curve::from_rows` performs the
//! dimension and point-count checks.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use polars::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One point per line, three whitespace-separated numbers
    Raw,
    /// Three numeric columns
    Csv,
    /// Three numeric columns
    Parquet,
}

impl InputFormat {
    /// Guess from the file extension; stdin and unknown extensions are raw.
    pub fn from_path(path: Option<&Path>) -> Self {
        let ext = path
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Self::Csv,
            Some("parquet") | Some("pq") => Self::Parquet,
            _ => Self::Raw,
        }
    }
}

/// Read coordinate rows from `path` (stdin when `None`).
pub fn read_rows(
    path: Option<&Path>,
    format: InputFormat,
    has_header: bool,
) -> Result<Vec<Vec<f64>>> {
    match (format, path) {
        (InputFormat::Raw, None) => parse_raw(std::io::stdin().lock()),
        (InputFormat::Raw, Some(p)) => {
            let file = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            parse_raw(BufReader::new(file)).with_context(|| format!("parsing {}", p.display()))
        }
        (_, None) => bail!("{format:?} input requires --input PATH"),
        (_, Some(p)) => {
            let df = read_frame(p, format, has_header)
                .with_context(|| format!("reading {}", p.display()))?;
            frame_rows(&df)
        }
    }
}

/// Parse raw text: exactly three numbers per non-blank line.
pub fn parse_raw<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("reading line {lineno}"))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            bail!(
                "line {lineno}: coordinate file should have 3 numbers on each line, found {}",
                fields.len()
            );
        }
        let row = fields
            .iter()
            .map(|f| {
                f.parse::<f64>()
                    .with_context(|| format!("line {lineno}: invalid number {f:?}"))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

fn read_frame(path: &Path, format: InputFormat, has_header: bool) -> Result<DataFrame> {
    let lf = match format {
        InputFormat::Csv => LazyCsvReader::new(path)
            .with_has_header(has_header)
            .with_infer_schema_length(Some(100))
            .finish()?,
        InputFormat::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        InputFormat::Raw => bail!("raw input is not a table"),
    };
    Ok(lf.collect()?)
}

/// Row-major copy of a frame's columns as `f64`; nulls and non-numeric cells are errors.
pub fn frame_rows(df: &DataFrame) -> Result<Vec<Vec<f64>>> {
    let mut cols: Vec<Vec<f64>> = Vec::with_capacity(df.width());
    for s in df.get_columns() {
        let name = s.name().to_string();
        let cast = s
            .cast(&DataType::Float64)
            .with_context(|| format!("column {name} is not numeric"))?;
        let values = cast
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                v.with_context(|| format!("column {name}, row {row}: missing or non-numeric value"))
            })
            .collect::<Result<Vec<f64>>>()?;
        cols.push(values);
    }
    Ok((0..df.height())
        .map(|r| cols.iter().map(|c| c[r]).collect())
        .collect())
}
