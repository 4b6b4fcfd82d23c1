//! spigot-core: analytic nth-prime estimation without sieving
//!
//! Approximates the nth prime by inverting an analytic approximation to the
//! prime-counting function pi(x), built from three pure components:
//!
//! 1. A series evaluator for the logarithmic integral li(x).
//! 2. A pi(x) estimator: li(x), minus a sqrt(x)/ln(x) correction, minus a
//!    damped oscillatory sum over zeta-zero ordinates.
//! 3. A bracket-plus-bisection inverter that finds the x whose estimated
//!    pi(x) equals a target index n.
//!
//! # Accuracy
//!
//! The estimator is heuristic: the explicit formula is truncated to a small
//! ordinate prefix and damped for numeric stability, so there are no
//! guaranteed error bounds. With the built-in 20 ordinates and the default
//! iteration budget, relative error is typically well below one percent for
//! n >= 15000.
//!
//! # Purity
//!
//! All estimation paths are pure functions of their numeric inputs plus a
//! read-only ordinate dataset: no caching, no shared mutable state, no I/O.
//! [`PrimeSpigot`] takes `&self` everywhere and can be shared across threads
//! without coordination.

mod error;
mod li;
mod pi;
mod spigot;
mod zeros;

pub use error::Error;
pub use li::{approx_li, DEFAULT_LI_TERMS, EULER_MASCHERONI};
pub use pi::estimate_pi;
pub use spigot::{
    estimate_nth_prime, initial_guess, PrimeSpigot, DEFAULT_BISECTION_ITERS,
};
pub use zeros::{ZetaZeros, FIRST_20_ORDINATES};

pub type Result<T> = std::result::Result<T, Error>;
