//! Pairwise exact binomial significance tests within a category group.
//!
//! Every unordered pair of categories in a group is tested under the null
//! hypothesis of an even 50/50 split between the two counts. The overall
//! significance budget is Bonferroni-divided by the number of pairs, so the
//! family-wise error rate stays at the caller's `overall_alpha`.

use statrs::distribution::{Binomial, DiscreteCDF};

/// Directional significance verdict for one pair of categories.
///
/// A verdict claims `winner > loser` at the group-corrected level. The
/// absence of a verdict for a pair is the null result, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairVerdict<T> {
    /// Category claimed to be chosen more often.
    pub winner: T,
    /// Category claimed to be chosen less often.
    pub loser: T,
    /// Raw count of the winning category.
    pub winner_count: u64,
    /// Raw count of the losing category.
    pub loser_count: u64,
    /// One-sided p-value of the winning direction.
    pub p_value: f64,
    /// Observed share difference `winner/m - loser/m`, always non-negative.
    pub diff: f64,
}

/// Runs one-sided exact binomial tests over all pairs in a comparison group.
///
/// For each unordered pair the direction `a > b` is tested first; only if it
/// is not significant is `b > a` tested, so at most one verdict is produced
/// per pair. Pairs whose combined count is zero are skipped (no evidence
/// either way), and a group with fewer than two members produces nothing.
///
/// # Examples
///
/// ```
/// use choicelab_stats::pairwise;
///
/// let counts = [("left", 80_u64), ("up", 20), ("right", 50), ("down", 50)];
/// let verdicts = pairwise::compare_group(&counts, 0.05);
/// assert!(verdicts.iter().any(|v| v.winner == "left" && v.loser == "up"));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn compare_group<T>(members: &[(T, u64)], overall_alpha: f64) -> Vec<PairVerdict<T>>
where
    T: Copy,
{
    let num_pairs = members.len() * members.len().saturating_sub(1) / 2;
    if num_pairs == 0 {
        return vec![];
    }
    let alpha_per_test = overall_alpha / num_pairs as f64;

    let mut verdicts = vec![];
    for (i, &(a, count_a)) in members.iter().enumerate() {
        for &(b, count_b) in &members[i + 1..] {
            let trials = count_a + count_b;
            if trials == 0 {
                continue;
            }

            let p_forward = one_sided_p(count_a, trials);
            if p_forward <= alpha_per_test {
                verdicts.push(PairVerdict {
                    winner: a,
                    loser: b,
                    winner_count: count_a,
                    loser_count: count_b,
                    p_value: p_forward,
                    diff: (count_a as f64 - count_b as f64) / trials as f64,
                });
                continue;
            }

            let p_reverse = one_sided_p(count_b, trials);
            if p_reverse <= alpha_per_test {
                verdicts.push(PairVerdict {
                    winner: b,
                    loser: a,
                    winner_count: count_b,
                    loser_count: count_a,
                    p_value: p_reverse,
                    diff: (count_b as f64 - count_a as f64) / trials as f64,
                });
            }
        }
    }
    verdicts
}

/// Exact probability of at least `successes` out of `trials` under p = 0.5.
fn one_sided_p(successes: u64, trials: u64) -> f64 {
    if successes == 0 {
        return 1.0;
    }
    match Binomial::new(0.5, trials) {
        Ok(null) => null.sf(successes - 1),
        Err(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_split_is_significant() {
        let counts = [("left", 80_u64), ("up", 20), ("right", 50), ("down", 50)];
        let verdicts = compare_group(&counts, 0.05);

        let left_up = verdicts
            .iter()
            .find(|v| v.winner == "left" && v.loser == "up")
            .expect("80 vs 20 out of 100 must be significant");
        assert_eq!(left_up.winner_count, 80);
        assert_eq!(left_up.loser_count, 20);
        assert!(left_up.p_value < 1e-8);
        assert!((left_up.diff - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_tied_pair_has_no_verdict() {
        let counts = [("left", 80_u64), ("up", 20), ("right", 50), ("down", 50)];
        let verdicts = compare_group(&counts, 0.05);
        assert!(
            !verdicts
                .iter()
                .any(|v| (v.winner == "right" && v.loser == "down")
                    || (v.winner == "down" && v.loser == "right"))
        );
    }

    #[test]
    fn test_at_most_one_verdict_per_pair() {
        let counts = [("a", 95_u64), ("b", 5), ("c", 60), ("d", 40)];
        let verdicts = compare_group(&counts, 0.05);
        for (i, first) in verdicts.iter().enumerate() {
            for second in &verdicts[i + 1..] {
                let same_pair = (first.winner == second.winner && first.loser == second.loser)
                    || (first.winner == second.loser && first.loser == second.winner);
                assert!(!same_pair, "pair reported twice");
            }
        }
    }

    #[test]
    fn test_direction_and_diff_sign_consistent() {
        let counts = [("a", 10_u64), ("b", 70), ("c", 30)];
        for verdict in compare_group(&counts, 0.05) {
            assert!(verdict.winner_count >= verdict.loser_count);
            assert!(verdict.diff >= 0.0);
        }
    }

    #[test]
    fn test_order_of_members_does_not_flip_verdicts() {
        let forward = compare_group(&[("a", 90_u64), ("b", 10)], 0.05);
        let reversed = compare_group(&[("b", 10_u64), ("a", 90)], 0.05);
        assert_eq!(forward.len(), 1);
        assert_eq!(reversed.len(), 1);
        assert_eq!(forward[0].winner, reversed[0].winner);
        assert_eq!(forward[0].p_value, reversed[0].p_value);
    }

    #[test]
    fn test_empty_pair_is_skipped() {
        let verdicts = compare_group(&[("a", 0_u64), ("b", 0), ("c", 40)], 0.05);
        assert!(!verdicts.iter().any(|v| {
            (v.winner == "a" && v.loser == "b") || (v.winner == "b" && v.loser == "a")
        }));
        // c dominates both empty categories.
        assert!(verdicts.iter().any(|v| v.winner == "c" && v.loser == "a"));
        assert!(verdicts.iter().any(|v| v.winner == "c" && v.loser == "b"));
    }

    #[test]
    fn test_singleton_group_produces_nothing() {
        assert!(compare_group(&[("only", 100_u64)], 0.05).is_empty());
        assert!(compare_group::<&str>(&[], 0.05).is_empty());
    }

    #[test]
    fn test_bonferroni_threshold_applied() {
        // 11 vs 2 out of 13: one-sided p ~ 0.0112. Significant alone at
        // 0.05, but not after dividing the budget by 6 pairs.
        let alone = compare_group(&[("a", 11_u64), ("b", 2)], 0.05);
        assert_eq!(alone.len(), 1);

        let in_group = compare_group(
            &[("a", 11_u64), ("b", 2), ("c", 7), ("d", 6)],
            0.05,
        );
        assert!(
            !in_group
                .iter()
                .any(|v| v.winner == "a" && v.loser == "b")
        );
    }

    #[test]
    fn test_one_sided_p_values() {
        // P(X >= 0) is certain; P(X >= m) = 0.5^m.
        assert_eq!(one_sided_p(0, 10), 1.0);
        assert!((one_sided_p(10, 10) - 0.5_f64.powi(10)).abs() < 1e-12);
        // P(X >= 5 | 10 trials) = 1 - P(X <= 4) = 0.623046875.
        assert!((one_sided_p(5, 10) - 0.623_046_875).abs() < 1e-9);
    }
}
