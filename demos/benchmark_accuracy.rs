//! Benchmark spigot accuracy against known nth primes
//!
//! Run: cargo run --example benchmark_accuracy

use prime_spigot::{PrimeSpigot, ZetaZeros};
use spigot_cli::bench::run_benchmark;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    println!("Prime Spigot Accuracy Benchmark");
    println!("===============================\n");

    let spigot = PrimeSpigot::new(ZetaZeros::first_20());
    let report = run_benchmark(&spigot)?;

    print!("{}", report.render());

    Ok(())
}
