//! Probability estimates from raw category counts.

/// Estimates the probability of a category from its count and the trial total.
///
/// Returns `count / total`. A zero trial total is a defined fallback, not an
/// error: the estimate is exactly `0.0`, never NaN.
///
/// The count is not required to be bounded by the total; callers supplying a
/// count above the total get an estimate above 1, mirroring the tolerance of
/// the ingestion format.
///
/// # Examples
///
/// ```
/// use choicelab_stats::proportion;
///
/// assert_eq!(proportion::estimate(25, 100), 0.25);
/// assert_eq!(proportion::estimate(0, 100), 0.0);
/// assert_eq!(proportion::estimate(7, 0), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn estimate(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ratio() {
        assert_eq!(estimate(1, 4), 0.25);
        assert_eq!(estimate(4, 4), 1.0);
        assert_eq!(estimate(0, 4), 0.0);
    }

    #[test]
    fn test_zero_total_is_zero_not_nan() {
        let p = estimate(10, 0);
        assert_eq!(p, 0.0);
        assert!(!p.is_nan());
    }

    #[test]
    fn test_in_unit_interval_when_count_bounded() {
        for total in 1..20_u64 {
            for count in 0..=total {
                let p = estimate(count, total);
                assert!((0.0..=1.0).contains(&p), "p = {p} for {count}/{total}");
            }
        }
    }

    #[test]
    fn test_count_above_total_tolerated() {
        assert_eq!(estimate(6, 4), 1.5);
    }
}
