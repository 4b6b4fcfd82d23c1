//! prime-spigot: facade over the analytic nth-prime estimation workspace
//!
//! Re-exports the numeric engine from `spigot-core` and the benchmark
//! harness from `spigot-cli`. See `spigot-core` for the estimator design.

pub use spigot_core::{
    approx_li, estimate_nth_prime, estimate_pi, initial_guess, Error, PrimeSpigot, Result,
    ZetaZeros, DEFAULT_BISECTION_ITERS, DEFAULT_LI_TERMS, EULER_MASCHERONI, FIRST_20_ORDINATES,
};

pub use spigot_cli::bench;
