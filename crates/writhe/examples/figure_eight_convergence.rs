//! Convergence of the writhe of a lifted figure eight as N grows and the lift shrinks.
//!
//! Purpose
//! - Show the discrete sum approaching the planar crossing count (+1) once the
//!   segment length is well below the lift at the crossing.
//! - Report wall-clock time per evaluation to size larger runs.
//!
//! Run: `cargo run --release -p writhe --example figure_eight_convergence`

use std::time::Instant;

use writhe::curves::figure_eight;
use writhe::{compute_writhe_with, NoProgress, WritheCfg};

fn main() {
    let cfg = WritheCfg::default();
    println!("{:>8} {:>6} {:>16} {:>10}", "lift", "N", "writhe", "ms");
    for lift in [0.05, 0.02, 0.01] {
        for n in [200usize, 400, 800, 1600, 3200] {
            let curve = figure_eight(n, lift).expect("figure eight");
            let start = Instant::now();
            let w = compute_writhe_with(curve.points(), &cfg, &NoProgress).expect("writhe");
            let ms = start.elapsed().as_secs_f64() * 1e3;
            println!("{lift:>8.3} {n:>6} {w:>16.12} {ms:>10.2}");
        }
    }
}
