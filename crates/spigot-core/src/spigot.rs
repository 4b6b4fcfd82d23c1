//! Inversion of the pi(x) estimate into an nth-prime estimate

use crate::error::Error;
use crate::pi::estimate_pi;
use crate::zeros::ZetaZeros;
use crate::Result;

/// Default bisection iteration budget.
///
/// 40 halvings of the initial bracket pin the estimate down to well below
/// one unit over the tested range.
pub const DEFAULT_BISECTION_ITERS: u32 = 40;

/// Initial bracket around the asymptotic guess.
const BRACKET_LOW_FACTOR: f64 = 0.8;
const BRACKET_HIGH_FACTOR: f64 = 1.5;

/// Growth factor applied while the upper bound is still too low.
const BRACKET_GROWTH: f64 = 1.5;

/// Hard ceiling on bracket expansion. Hitting it is not an error; bisection
/// proceeds on the best available bracket and convergence quality is simply
/// not guaranteed past this point.
const BRACKET_CEILING: f64 = 1e18;

/// Estimates nth primes by bisecting the analytic pi(x) estimate.
///
/// Owns a read-only ordinate dataset and an iteration budget; every method
/// takes `&self`, so a spigot can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct PrimeSpigot {
    zeros: ZetaZeros,
    bisection_iters: u32,
}

impl PrimeSpigot {
    /// Create a spigot over an ordinate dataset with the default budget.
    pub fn new(zeros: ZetaZeros) -> Self {
        Self {
            zeros,
            bisection_iters: DEFAULT_BISECTION_ITERS,
        }
    }

    /// Override the bisection iteration budget.
    pub fn with_bisection_iters(mut self, iters: u32) -> Self {
        self.bisection_iters = iters;
        self
    }

    /// The ordinate dataset backing this spigot.
    pub fn zeros(&self) -> &ZetaZeros {
        &self.zeros
    }

    /// Estimate pi(x) over this spigot's ordinate dataset.
    pub fn estimate_pi(&self, x: f64) -> f64 {
        estimate_pi(x, &self.zeros)
    }

    /// Estimate the nth prime (1-indexed) as an unrounded float.
    ///
    /// n = 1 and n = 2 return 2.0 and 3.0 directly; the asymptotic machinery
    /// is unreliable at that scale. The only error is `InvalidIndex` for
    /// n = 0.
    pub fn nth_prime(&self, n: u64) -> Result<f64> {
        if n == 0 {
            return Err(Error::InvalidIndex { n });
        }
        if n == 1 {
            return Ok(2.0);
        }
        if n == 2 {
            return Ok(3.0);
        }

        let target = n as f64;
        let (mut low, mut high) = self.bracket(n);

        for _ in 0..self.bisection_iters {
            let mid = (low + high) / 2.0;
            if self.estimate_pi(mid) < target {
                low = mid;
            } else {
                high = mid;
            }
        }

        Ok((low + high) / 2.0)
    }

    /// Build a bracket [low, high] around the asymptotic guess such that
    /// the pi estimate at `high` reaches n, expanding the upper bound
    /// geometrically up to the ceiling.
    fn bracket(&self, n: u64) -> (f64, f64) {
        let guess = initial_guess(n);
        let low = (guess * BRACKET_LOW_FACTOR).max(2.0);
        let mut high = guess * BRACKET_HIGH_FACTOR;

        while self.estimate_pi(high) < n as f64 {
            high *= BRACKET_GROWTH;
            if high > BRACKET_CEILING {
                break;
            }
        }

        (low, high)
    }
}

impl Default for PrimeSpigot {
    fn default() -> Self {
        Self::new(ZetaZeros::first_20())
    }
}

/// Asymptotic first guess for the nth prime.
///
/// For n >= 6: n * (ln n + ln ln n - 1 + (ln ln n - 2) / ln n).
/// For 3 <= n <= 5 the refined expansion misbehaves, and n * ln n is close
/// enough to seed a bracket.
pub fn initial_guess(n: u64) -> f64 {
    let nf = n as f64;
    let logn = nf.ln();
    let loglogn = if logn > 1.0 { logn.ln() } else { 0.0 };

    if n >= 6 {
        nf * (logn + loglogn - 1.0 + (loglogn - 2.0) / logn)
    } else {
        nf * logn
    }
}

/// One-shot convenience over [`PrimeSpigot::nth_prime`] with the default
/// iteration budget.
pub fn estimate_nth_prime(n: u64, zeros: &ZetaZeros) -> Result<f64> {
    PrimeSpigot::new(zeros.clone()).nth_prime(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases_exact() {
        let spigot = PrimeSpigot::default();
        assert_eq!(spigot.nth_prime(1).unwrap(), 2.0);
        assert_eq!(spigot.nth_prime(2).unwrap(), 3.0);
    }

    #[test]
    fn test_zero_index_rejected() {
        let spigot = PrimeSpigot::default();
        assert!(matches!(
            spigot.nth_prime(0),
            Err(Error::InvalidIndex { n: 0 })
        ));
    }

    #[test]
    fn test_bracket_straddles_target() {
        let spigot = PrimeSpigot::default();
        for n in [100u64, 1_000, 15_000, 100_000] {
            let (low, high) = spigot.bracket(n);
            assert!(low >= 2.0);
            assert!(low < high);
            assert!(
                spigot.estimate_pi(low) < n as f64,
                "pi(low) must undershoot n = {n}"
            );
            assert!(
                spigot.estimate_pi(high) >= n as f64,
                "pi(high) must reach n = {n}"
            );
        }
    }

    #[test]
    fn test_initial_guess_tracks_known_primes() {
        // The guess only needs to land within the 0.8x / 1.5x bracket.
        let cases = [(15_000u64, 163_841.0), (100_000, 1_299_709.0)];
        for (n, actual) in cases {
            let guess = initial_guess(n);
            assert!(guess * 0.8 < actual && actual < guess * 1.5);
        }
    }

    #[test]
    fn test_small_n_guess_fallback() {
        // 3 <= n <= 5 uses the coarse n * ln n form.
        for n in [3u64, 4, 5] {
            let nf = n as f64;
            assert_eq!(initial_guess(n), nf * nf.ln());
        }
    }

    #[test]
    fn test_repeated_calls_bit_identical() {
        let spigot = PrimeSpigot::default();
        let a = spigot.nth_prime(15_000).unwrap();
        let b = spigot.nth_prime(15_000).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_convenience_matches_spigot() {
        let zeros = ZetaZeros::first_20();
        let via_fn = estimate_nth_prime(5_000, &zeros).unwrap();
        let via_spigot = PrimeSpigot::new(zeros).nth_prime(5_000).unwrap();
        assert_eq!(via_fn.to_bits(), via_spigot.to_bits());
    }
}
