//! CLI and benchmark harness for the analytic prime spigot

pub mod bench;

pub use bench::{run_benchmark, BenchReport, BenchRow, REFERENCE_CASES};
