//! Analytic estimation of the prime-counting function
//!
//! Truncated, damped form of the explicit formula: li(x), minus the leading
//! sqrt(x)/ln(x) prime-power correction, minus an oscillatory sum over
//! zeta-zero ordinates.

use std::f64::consts::FRAC_PI_4;

use crate::li::{approx_li, DEFAULT_LI_TERMS};
use crate::zeros::ZetaZeros;

/// Offset added to ln(x) in the damping exponent.
///
/// With only a finite prefix of zeros, the undamped sum oscillates with
/// spuriously large amplitude as x grows; exp(-ordinate / (ln x + 20))
/// suppresses the higher ordinates' contributions instead. Changing this
/// constant (or the -pi/4 phase offset) shifts the accuracy profile, so both
/// are fixed rather than configurable.
const DAMPING_OFFSET: f64 = 20.0;

/// Estimate pi(x), the count of primes <= x.
///
/// Returns a fractional value: the estimate is a smooth proxy for the true
/// step function, suitable as a bisection target. Not guaranteed strictly
/// monotone at small scales because of the oscillatory term, but monotone
/// enough over the ranges of interest for bracketing to converge.
///
/// Returns 0.0 for x <= 2, mirroring the log-integral floor.
pub fn estimate_pi(x: f64, zeros: &ZetaZeros) -> f64 {
    if x <= 2.0 {
        return 0.0;
    }

    let li = approx_li(x, DEFAULT_LI_TERMS);
    let logx = x.ln();
    let sqrtx = x.sqrt();

    let mut osc = 0.0;
    for &ordinate in zeros.ordinates() {
        // Guard against malformed datasets that bypassed validation.
        if ordinate > 0.0 {
            let phase = ordinate * logx - FRAC_PI_4;
            let damping = (-ordinate / (logx + DAMPING_OFFSET)).exp();
            osc += damping * phase.cos() / ordinate;
        }
    }
    osc *= 2.0 * sqrtx;

    li - sqrtx / logx - osc
}
