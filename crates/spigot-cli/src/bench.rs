//! Accuracy benchmark against known nth primes

use std::fmt::Write as _;

use serde::Serialize;
use spigot_core::PrimeSpigot;

/// Reference (n, actual nth prime) pairs.
///
/// The n = 75000 entry is 951161; an older fixture circulated with the
/// erroneous value 909091, which inflated the reported error.
pub const REFERENCE_CASES: [(u64, u64); 6] = [
    (15_000, 163_841),
    (25_000, 287_117),
    (50_000, 611_953),
    (75_000, 951_161),
    (100_000, 1_299_709),
    (200_000, 2_750_159),
];

/// One benchmark case result.
#[derive(Debug, Clone, Serialize)]
pub struct BenchRow {
    pub n: u64,
    pub actual: u64,
    pub estimate: f64,
    pub abs_error: f64,
    pub rel_error_pct: f64,
}

/// Full benchmark run with the average relative error summary.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub rows: Vec<BenchRow>,
    pub avg_rel_error_pct: f64,
}

/// Run every reference case through the spigot.
pub fn run_benchmark(spigot: &PrimeSpigot) -> spigot_core::Result<BenchReport> {
    let mut rows = Vec::with_capacity(REFERENCE_CASES.len());
    for (n, actual) in REFERENCE_CASES {
        let estimate = spigot.nth_prime(n)?;
        let abs_error = (estimate - actual as f64).abs();
        let rel_error_pct = abs_error / actual as f64 * 100.0;
        rows.push(BenchRow {
            n,
            actual,
            estimate,
            abs_error,
            rel_error_pct,
        });
    }

    let avg_rel_error_pct =
        rows.iter().map(|row| row.rel_error_pct).sum::<f64>() / rows.len() as f64;

    Ok(BenchReport {
        rows,
        avg_rel_error_pct,
    })
}

impl BenchReport {
    /// Render the fixed-width results table.
    pub fn render(&self) -> String {
        let rule = "-".repeat(60);
        let mut out = String::new();

        writeln!(out, "Benchmark Results").unwrap();
        writeln!(out, "{rule}").unwrap();
        writeln!(
            out,
            "{:<10} {:<12} {:<12} {:<12} {:<14}",
            "n", "Actual", "Estimate", "Abs Error", "Rel Error (%)"
        )
        .unwrap();
        writeln!(out, "{rule}").unwrap();

        for row in &self.rows {
            writeln!(
                out,
                "{:<10} {:<12} {:<12.0} {:<12.0} {:<14.3}",
                row.n, row.actual, row.estimate, row.abs_error, row.rel_error_pct
            )
            .unwrap();
        }

        writeln!(out, "{rule}").unwrap();
        writeln!(
            out,
            "Average relative error: {:.3}%",
            self.avg_rel_error_pct
        )
        .unwrap();

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spigot_core::ZetaZeros;

    #[test]
    fn test_reference_cases_fixture() {
        assert_eq!(REFERENCE_CASES.len(), 6);
        // Regression guard on the historical 75000th-prime typo.
        assert!(REFERENCE_CASES.iter().all(|&(_, actual)| actual != 909_091));
        assert!(REFERENCE_CASES.contains(&(75_000, 951_161)));
    }

    #[test]
    fn test_benchmark_report() {
        let spigot = PrimeSpigot::new(ZetaZeros::first_20());
        let report = run_benchmark(&spigot).unwrap();

        assert_eq!(report.rows.len(), REFERENCE_CASES.len());
        assert!(report.avg_rel_error_pct >= 0.0);
        assert!(report.avg_rel_error_pct < 1.0);
    }

    #[test]
    fn test_render_shape() {
        let report = BenchReport {
            rows: vec![BenchRow {
                n: 15_000,
                actual: 163_841,
                estimate: 163_900.0,
                abs_error: 59.0,
                rel_error_pct: 0.036,
            }],
            avg_rel_error_pct: 0.036,
        };
        let rendered = report.render();

        assert!(rendered.starts_with("Benchmark Results"));
        assert!(rendered.contains("Rel Error (%)"));
        assert!(rendered.contains("163841"));
        assert!(rendered.trim_end().ends_with("0.036%"));
    }

    #[test]
    fn test_report_serializes() {
        let spigot = PrimeSpigot::new(ZetaZeros::first_20());
        let report = run_benchmark(&spigot).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"avg_rel_error_pct\""));
    }
}
