//! Wilson score confidence intervals for binomial proportions.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::proportion;

/// Wilson score interval for a single category's probability.
///
/// Unlike the normal approximation, the Wilson construction stays inside
/// `[0, 1]` and remains well-behaved for proportions near the boundaries.
///
/// # Examples
///
/// ```
/// use choicelab_stats::wilson::WilsonInterval;
///
/// let interval = WilsonInterval::new(50, 100, 0.05);
/// assert!(interval.lower > 0.40 && interval.lower < 0.41);
/// assert!(interval.upper > 0.59 && interval.upper < 0.60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilsonInterval {
    /// Point estimate `count / total` (0 when the total is 0).
    pub estimate: f64,
    /// Lower bound, clamped to `[0, 1]`.
    pub lower: f64,
    /// Upper bound, clamped to `[0, 1]`.
    pub upper: f64,
}

impl WilsonInterval {
    /// Computes the Wilson score interval for `count` successes out of
    /// `total` trials at the given two-sided significance level `alpha`.
    ///
    /// A zero trial total carries no information and yields the
    /// unconditional interval `[0, 1]` with a zero point estimate.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(count: u64, total: u64, alpha: f64) -> Self {
        let p_hat = proportion::estimate(count, total);
        if total == 0 {
            return Self {
                estimate: p_hat,
                lower: 0.0,
                upper: 1.0,
            };
        }

        let z = normal_quantile(1.0 - alpha / 2.0);
        let z2 = z * z;
        let n = total as f64;

        let denom = 1.0 + z2 / n;
        let center = p_hat + z2 / (2.0 * n);
        let radius = z * (p_hat * (1.0 - p_hat) / n + z2 / (4.0 * n * n)).max(0.0).sqrt();

        Self {
            estimate: p_hat,
            lower: ((center - radius) / denom).clamp(0.0, 1.0),
            upper: ((center + radius) / denom).clamp(0.0, 1.0),
        }
    }

    /// Larger of the two one-sided margins around the point estimate.
    #[must_use]
    pub fn margin(&self) -> f64 {
        (self.estimate - self.lower).max(self.upper - self.estimate)
    }
}

/// Standard normal quantile (inverse CDF) at cumulative probability `p`.
fn normal_quantile(p: f64) -> f64 {
    // Unit parameters cannot fail; the fallback keeps the function total.
    match Normal::new(0.0, 1.0) {
        Ok(standard) => standard.inverse_cdf(p),
        Err(_) => 0.0,
    }
}
