//! Descriptive statistics for probability groups with zero exclusion.
//!
//! A category whose probability estimate is exactly zero is treated as
//! structurally absent and excluded from its group's mean and variance. A
//! category that never occurred therefore does not drag down the baseline
//! used to judge the others.
//!
//! Caveat: a true zero (a category measured at probability 0 across many
//! trials) is indistinguishable from an unmeasured one and is excluded the
//! same way, which can surprise at low sample sizes.

/// Spread of probability estimates within one category group.
///
/// `mean` is on the probability scale; `variance_pct2` and `std_pct` are on
/// the percentage scale (values multiplied by 100 before squaring), matching
/// how deviations are reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSpread {
    /// Arithmetic mean of the non-zero probabilities; 0 if all are zero.
    pub mean: f64,
    /// Population variance (divisor = number of non-zero values) of the
    /// non-zero probabilities, in percentage-squared units; 0 if none.
    pub variance_pct2: f64,
    /// Standard deviation in percentage points, `sqrt(variance_pct2)`.
    pub std_pct: f64,
}

impl GroupSpread {
    /// Computes the spread of a group of probability estimates.
    ///
    /// Zero values are excluded from both the mean and the variance. An
    /// all-zero (or empty) group yields all-zero statistics; a singleton
    /// group yields its value as the mean and zero variance.
    ///
    /// # Examples
    ///
    /// ```
    /// use choicelab_stats::spread::GroupSpread;
    ///
    /// let spread = GroupSpread::new([0.10, 0.20, 0.0, 0.30]);
    /// assert!((spread.mean - 0.20).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(probabilities: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let included = probabilities
            .into_iter()
            .filter(|p| *p != 0.0)
            .collect::<Vec<_>>();
        if included.is_empty() {
            return Self {
                mean: 0.0,
                variance_pct2: 0.0,
                std_pct: 0.0,
            };
        }

        let n = included.len() as f64;
        let mean = included.iter().sum::<f64>() / n;
        let mean_pct = mean * 100.0;
        let variance_pct2 = included
            .iter()
            .map(|p| (p * 100.0 - mean_pct).powi(2))
            .sum::<f64>()
            / n;

        Self {
            mean,
            variance_pct2,
            std_pct: variance_pct2.sqrt(),
        }
    }

    /// Deviation of a probability from the group mean, in percentage points.
    ///
    /// Defined for every category in the group, including excluded zeros.
    #[must_use]
    pub fn deviation_pct(&self, probability: f64) -> f64 {
        (probability - self.mean) * 100.0
    }
}

/// Combined standard deviation of two subgroups, in percentage points.
///
/// Defined as `sqrt(var_a + var_b)`. Not a rigorous pooled deviation (the
/// subgroup means differ), but the contracted summary figure for the
/// straight/diagonal direction split.
#[must_use]
pub fn combined_std_pct(a: &GroupSpread, b: &GroupSpread) -> f64 {
    (a.variance_pct2 + b.variance_pct2).sqrt()
}
