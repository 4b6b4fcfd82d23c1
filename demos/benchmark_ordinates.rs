//! Benchmark accuracy versus ordinate dataset size
//!
//! Shows how the damped oscillatory correction sharpens as more zeta-zero
//! ordinates participate in the explicit-formula sum.
//! Run: cargo run --example benchmark_ordinates

use prime_spigot::{PrimeSpigot, ZetaZeros};
use spigot_cli::bench::run_benchmark;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    println!("Ordinate Count Benchmark");
    println!("========================\n");

    let full = ZetaZeros::first_20();

    for count in [1usize, 5, 10, 20] {
        let zeros = full.truncated(count)?;
        let spigot = PrimeSpigot::new(zeros);
        let report = run_benchmark(&spigot)?;

        println!(
            "{:>2} ordinates: average relative error {:.4}%",
            count, report.avg_rel_error_pct
        );
    }

    println!("\nEach run uses the default 40-iteration bisection budget;");
    println!("only the oscillatory correction changes with the dataset size.");

    Ok(())
}
