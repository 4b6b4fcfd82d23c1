//! Series evaluation of the logarithmic integral

/// Euler-Mascheroni constant.
pub const EULER_MASCHERONI: f64 = 0.5772156649015329;

/// Default bound on the number of series terms.
///
/// The cutoff below normally fires long before this; the hard ceiling only
/// protects against pathological inputs.
pub const DEFAULT_LI_TERMS: usize = 100;

/// Terms below this magnitude no longer move the accumulator meaningfully.
const CONVERGENCE_CUTOFF: f64 = 1e-12;

/// Approximate li(x) through the series for Ei(ln x):
///
/// li(x) = gamma + ln(ln x) + sum_{k>=1} (ln x)^k / (k * k!)
///
/// Returns 0.0 for x <= 2; li has no useful meaning below that floor for
/// prime counting, and the guard keeps ln(ln x) defined.
pub fn approx_li(x: f64, terms: usize) -> f64 {
    if x <= 2.0 {
        return 0.0;
    }
    let z = x.ln();
    let mut result = EULER_MASCHERONI + z.ln();

    // Running power of z and running factorial avoid recomputation per term.
    let mut zk = z;
    let mut factorial = 1.0_f64;
    for k in 1..terms {
        factorial *= k as f64;
        let term = zk / (k as f64 * factorial);
        if term.abs() < CONVERGENCE_CUTOFF {
            break;
        }
        result += term;
        zk *= z;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_floor() {
        assert_eq!(approx_li(2.0, DEFAULT_LI_TERMS), 0.0);
        assert_eq!(approx_li(1.0, DEFAULT_LI_TERMS), 0.0);
        assert_eq!(approx_li(0.0, DEFAULT_LI_TERMS), 0.0);
        assert_eq!(approx_li(-5.0, DEFAULT_LI_TERMS), 0.0);
    }

    #[test]
    fn test_known_value() {
        // li(10^6) is about 78627.55 (versus pi(10^6) = 78498)
        let li = approx_li(1.0e6, DEFAULT_LI_TERMS);
        assert!(li > 78_600.0 && li < 78_660.0, "li(1e6) = {li}");
    }

    #[test]
    fn test_finite_positive_increasing() {
        let samples = [1.0e6, 1.0e7, 1.0e8, 1.0e9, 1.0e12];
        let mut prev = 0.0;
        for x in samples {
            let li = approx_li(x, DEFAULT_LI_TERMS);
            assert!(li.is_finite());
            assert!(li > 0.0);
            assert!(li > prev, "li must increase: li({x}) = {li} <= {prev}");
            prev = li;
        }
    }

    #[test]
    fn test_term_budget_respected() {
        // With a tiny budget the series truncates but stays finite.
        let truncated = approx_li(1.0e12, 5);
        let full = approx_li(1.0e12, DEFAULT_LI_TERMS);
        assert!(truncated.is_finite());
        assert!(truncated < full);
    }
}
