//! Compare dual-number differentiation with the analytical derivative and
//! with central finite differences over a sweep of step sizes.
//!
//! The test function is `f(x) = ln(sin x) + x²·cos x`, whose derivative is
//! `cot x + 2x·cos x − x²·sin x`.
//!
//! ```text
//! RUST_LOG=debug cargo run --features demo --bin diff_demo -- --point 1.5
//! ```

use std::hint::black_box;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use dual_autodiff::{central_difference, try_value_and_derivative, DualNumber64, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Dual numbers versus finite differences.
#[derive(Parser, Debug)]
#[command(name = "diff_demo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Point at which the derivative is evaluated (must lie in (0, π))
    #[arg(short, long, default_value_t = 1.5)]
    point: f64,

    /// Number of finite-difference step sizes in the sweep
    #[arg(short, long, default_value_t = 100)]
    steps: usize,

    /// Smallest finite-difference step size
    #[arg(long, default_value_t = 1e-6)]
    min_step: f64,

    /// Largest finite-difference step size
    #[arg(long, default_value_t = 1.0)]
    max_step: f64,

    /// Repetitions for the timing comparison
    #[arg(short, long, default_value_t = 1000)]
    repeat: u32,
}

fn f_dual(x: DualNumber64) -> Result<DualNumber64> {
    Ok(x.sin().log()? + x.powf(2.0)? * x.cos())
}

fn f_plain(x: f64) -> f64 {
    x.sin().ln() + x.powi(2) * x.cos()
}

fn analytical(x: f64) -> f64 {
    1.0 / x.tan() + 2.0 * x * x.cos() - x.powi(2) * x.sin()
}

fn step_sizes(args: &Args) -> Vec<f64> {
    let span = args.max_step - args.min_step;
    let last = (args.steps - 1) as f64;
    (0..args.steps)
        .map(|i| args.min_step + span * i as f64 / last)
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    if args.steps < 2 {
        bail!("--steps must be at least 2 (got {})", args.steps);
    }
    if !(args.min_step > 0.0 && args.min_step < args.max_step) {
        bail!(
            "step range must satisfy 0 < min-step < max-step (got {} .. {})",
            args.min_step,
            args.max_step
        );
    }

    let x = args.point;
    let (value, ad) = try_value_and_derivative(f_dual, x)
        .with_context(|| format!("cannot differentiate f at x = {x}"))?;
    let exact = analytical(x);
    info!(x, value, "evaluated f");

    println!("f(x) = ln(sin x) + x^2 cos x at x = {x}");
    println!("{:<28} {:>22}", "analytical", exact);
    println!("{:<28} {:>22} (error {:e})", "dual numbers", ad, (ad - exact).abs());
    println!();
    println!("{:>14} {:>22} {:>14}", "step", "central difference", "abs error");

    let mut worst = (0.0, 0.0);
    for h in step_sizes(&args) {
        let fd = central_difference(f_plain, x, h);
        let err = (fd - exact).abs();
        if err > worst.1 {
            worst = (h, err);
        }
        println!("{h:>14.6e} {fd:>22.15} {err:>14.3e}");
    }
    if worst.1 > (ad - exact).abs() {
        info!(step = worst.0, error = worst.1, "largest finite-difference error");
    } else {
        warn!("finite differences never did worse than dual numbers");
    }

    let start = Instant::now();
    for _ in 0..args.repeat {
        black_box(central_difference(f_plain, black_box(x), 1e-6));
    }
    let fd_time = start.elapsed();

    let start = Instant::now();
    for _ in 0..args.repeat {
        black_box(try_value_and_derivative(f_dual, black_box(x))?);
    }
    let ad_time = start.elapsed();

    println!();
    println!(
        "{} central differences: {:?}, {} dual evaluations: {:?}",
        args.repeat, fd_time, args.repeat, ad_time
    );
    Ok(())
}
