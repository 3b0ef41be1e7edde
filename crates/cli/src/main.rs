mod input;
mod output;
mod provenance;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::fmt::SubscriberBuilder;
use writhe::curves::{
    figure_eight, fourier_knot, regular_polygon, torus_knot, trefoil, FourierCfg, ReplayToken,
};
use writhe::{compute_writhe_with, Curve, LogProgress, Reduction, WritheCfg};

use input::InputFormat;
use output::{format_sig, WritheReport, PRINT_DIGITS};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "calc_writhe", version)]
#[command(about = "Writhe of a closed polygonal curve in 3D (discretized Gauss integral)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read a closed curve and print its writhe
    Writhe(WritheArgs),
    /// Write a sample closed curve in raw 3-column format
    Sample(SampleArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct WritheArgs {
    /// Coordinate file; reads raw text from stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// Input format; guessed from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<InputFormat>,
    /// CSV input has no header row
    #[arg(long)]
    no_header: bool,
    /// Seconds between progress updates (per worker); 0 disables
    #[arg(long)]
    progress: Option<f64>,
    /// Worker threads; defaults to rayon's pool (RAYON_NUM_THREADS)
    #[arg(long)]
    threads: Option<usize>,
    #[arg(long, value_enum, default_value_t = ReductionArg::Ordered)]
    reduction: ReductionArg,
    /// Treat the curve as open (not supported)
    #[arg(long)]
    open: bool,
    /// Also write a JSON report (and provenance sidecar) here
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct SampleArgs {
    #[arg(long, value_enum)]
    shape: Shape,
    /// Number of points
    #[arg(long, default_value_t = 200)]
    n: usize,
    /// Half the z-separation at the figure-eight crossing
    #[arg(long, default_value_t = 0.02)]
    lift: f64,
    /// Torus knot windings around the axis
    #[arg(long, default_value_t = 2)]
    p: u32,
    /// Torus knot windings through the hole
    #[arg(long, default_value_t = 3)]
    q: u32,
    /// Seed for the random Fourier curve
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Output file; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReductionArg {
    Ordered,
    Locked,
}

impl From<ReductionArg> for Reduction {
    fn from(r: ReductionArg) -> Self {
        match r {
            ReductionArg::Ordered => Reduction::Ordered,
            ReductionArg::Locked => Reduction::Locked,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Polygon,
    FigureEight,
    Torus,
    Trefoil,
    Fourier,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Writhe(args) => run_writhe(args),
        Action::Sample(args) => run_sample(args),
        Action::Report => report(),
    }
}

fn progress_interval(seconds: Option<f64>) -> Result<Option<Duration>> {
    let Some(s) = seconds else {
        return Ok(None);
    };
    match Duration::try_from_secs_f64(s) {
        Ok(d) => Ok(Some(d)),
        Err(_) => bail!("--progress expects a non-negative number of seconds, got {s}"),
    }
}

fn run_writhe(args: WritheArgs) -> Result<()> {
    tracing::info!(version = writhe::VERSION, "calc_writhe");
    if args.open {
        bail!("this program does not yet support automatic closure of open curves");
    }
    let input = args.input.as_deref();
    let format = args
        .format
        .unwrap_or_else(|| InputFormat::from_path(input));
    let rows = input::read_rows(input, format, !args.no_header)?;
    let curve = Curve::from_rows(&rows).context("invalid curve")?;
    let cfg = WritheCfg {
        threads: args.threads,
        progress_interval: progress_interval(args.progress)?,
        reduction: args.reduction.into(),
    };
    let n_points = curve.points().len();
    tracing::info!(n_points, threads = ?cfg.threads, reduction = ?cfg.reduction, "computing");

    let start = Instant::now();
    let writhe = compute_writhe_with(curve.points(), &cfg, &LogProgress)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(elapsed_ms, "done");
    if !writhe.is_finite() {
        tracing::warn!("non-finite writhe: the curve has coincident segment midpoints");
    }
    println!("{}", format_sig(writhe, PRINT_DIGITS));

    if let Some(out) = args.out {
        let report = WritheReport {
            writhe,
            finite: writhe.is_finite(),
            n_points,
            threads: cfg.threads,
            reduction: format!("{:?}", cfg.reduction).to_lowercase(),
            elapsed_ms,
        };
        let params = serde_json::json!({
            "format": format!("{format:?}").to_lowercase(),
            "threads": cfg.threads,
            "progress_s": args.progress,
            "reduction": report.reduction,
        });
        let payload = Payload::new(input, &curve, params);
        output::write_report(&out, &report, &payload)?;
    }
    Ok(())
}

fn sample_curve(args: &SampleArgs) -> Result<Curve> {
    let curve = match args.shape {
        Shape::Polygon => regular_polygon(args.n, 1.0),
        Shape::FigureEight => figure_eight(args.n, args.lift),
        Shape::Torus => torus_knot(args.p, args.q, args.n, 2.0, 1.0),
        Shape::Trefoil => trefoil(args.n),
        Shape::Fourier => {
            let tok = ReplayToken {
                seed: args.seed,
                index: 0,
            };
            fourier_knot(args.n, FourierCfg::default(), tok)
        }
    };
    Ok(curve?)
}

fn run_sample(args: SampleArgs) -> Result<()> {
    let curve = sample_curve(&args)?;
    tracing::info!(shape = ?args.shape, n = args.n, "sample");
    match args.out.as_deref() {
        Some(path) => write_sample_file(path, &curve),
        None => output::write_raw(std::io::stdout().lock(), curve.points()),
    }
}

fn write_sample_file(path: &Path, curve: &Curve) -> Result<()> {
    provenance::ensure_parent(path)?;
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    output::write_raw(std::io::BufWriter::new(file), curve.points())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "tool": { "name": "calc_writhe", "version": writhe::VERSION },
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
