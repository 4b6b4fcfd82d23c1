//! spigot CLI binary
//!
//! Run with:
//! ```bash
//! cargo run -p spigot-cli --bin spigot -- --nth 15000
//! cargo run -p spigot-cli --bin spigot -- --bench
//! ```

use std::path::PathBuf;

use clap::Parser;
use spigot_cli::bench::run_benchmark;
use spigot_core::{PrimeSpigot, ZetaZeros, DEFAULT_BISECTION_ITERS};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spigot")]
#[command(about = "Estimate the nth prime by inverting an analytic pi(x) approximation")]
struct Args {
    /// Prime index to estimate (1-based)
    #[arg(long, conflicts_with = "bench")]
    nth: Option<u64>,

    /// Run the reference accuracy benchmark
    #[arg(long)]
    bench: bool,

    /// JSON file with zeta-zero ordinates (default: built-in first 20)
    #[arg(long)]
    zeros: Option<PathBuf>,

    /// Bisection iteration budget
    #[arg(long, default_value_t = DEFAULT_BISECTION_ITERS)]
    iters: u32,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("spigot=info".parse()?))
        .init();

    let args = Args::parse();

    let zeros = match &args.zeros {
        Some(path) => ZetaZeros::load(path)?,
        None => ZetaZeros::first_20(),
    };
    tracing::info!(
        ordinates = zeros.len(),
        iters = args.iters,
        "spigot ready"
    );

    let spigot = PrimeSpigot::new(zeros).with_bisection_iters(args.iters);

    if args.bench {
        let report = run_benchmark(&spigot)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", report.render());
        }
        return Ok(());
    }

    let Some(n) = args.nth else {
        anyhow::bail!("pass --nth <N> to estimate a prime, or --bench to run the benchmark");
    };

    let estimate = spigot.nth_prime(n)?;
    if args.json {
        println!("{}", serde_json::json!({ "n": n, "estimate": estimate }));
    } else {
        println!("estimated prime #{n}: {estimate:.0}");
    }

    Ok(())
}
