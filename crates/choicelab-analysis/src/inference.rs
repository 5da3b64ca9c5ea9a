//! Per-experiment inference: estimates, spreads, intervals, and verdicts.
//!
//! [`ExperimentInference::analyze`] is the single entry point. It is a pure
//! function of one [`ExperimentRecord`]: no state survives between
//! experiments and re-running it yields identical output, so records may be
//! processed in any order or in parallel.
//!
//! Two distinct Bonferroni schemes are in play and deliberately kept apart:
//! confidence intervals split the budget per *category* across a family
//! (0.05/4 for doors, 0.05/8 for directions), while significance tests split
//! it per *pair* within a comparison group (0.05/6 for a 4-member group).

use std::fmt::Display;

use choicelab_stats::{
    pairwise::{self, PairVerdict},
    proportion,
    spread::{self, GroupSpread},
    wilson::WilsonInterval,
};
use serde::Serialize;

use crate::record::{Direction, Door, ExperimentRecord};

/// Family-wise significance budget for each comparison group.
pub const OVERALL_ALPHA: f64 = 0.05;
/// Per-interval significance level for door categories.
pub const DOOR_INTERVAL_ALPHA: f64 = OVERALL_ALPHA / 4.0;
/// Per-interval significance level for direction categories.
pub const DIRECTION_INTERVAL_ALPHA: f64 = OVERALL_ALPHA / 8.0;

/// Intervals with a margin at or below one percentage point are flagged as
/// narrow for the report assembler.
const NARROW_MARGIN: f64 = 0.01;

/// Probability estimate for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEstimate {
    pub label: String,
    pub probability: f64,
}

/// Probability estimates for both families, in canonical category order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateTable {
    pub doors: Vec<CategoryEstimate>,
    pub directions: Vec<CategoryEstimate>,
}

/// Deviation of one category from its group mean, in percentage points.
///
/// Present for every category, including those excluded from the mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDeviation {
    pub label: String,
    pub deviation_pct: f64,
}

/// Spread statistics for one named comparison group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStatistics {
    pub name: String,
    /// Mean probability over the non-zero categories.
    pub mean: f64,
    pub deviations: Vec<CategoryDeviation>,
    pub variance_pct2: f64,
    pub std_pct: f64,
}

/// Group statistics for the three comparison groups plus the combined
/// direction figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTable {
    pub door: GroupStatistics,
    pub straight: GroupStatistics,
    pub diagonal: GroupStatistics,
    /// `sqrt(straight_variance + diagonal_variance)`, in percentage points.
    pub combined_direction_std_pct: f64,
}

/// Wilson interval for one category with the narrow-margin convenience flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInterval {
    pub label: String,
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
    /// `max(estimate - lower, upper - estimate)`.
    pub margin: f64,
    /// Whether the margin is at most one percentage point.
    pub narrow: bool,
}

/// Confidence intervals for both families, in canonical category order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalTable {
    pub doors: Vec<CategoryInterval>,
    pub directions: Vec<CategoryInterval>,
}

/// Significance verdict between two categories of the same group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub winner: String,
    pub loser: String,
    pub winner_count: u64,
    pub loser_count: u64,
    pub p_value: f64,
    pub diff: f64,
}

/// Verdicts per comparison group. The straight and diagonal direction
/// subgroups are tested separately and never against each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictTable {
    pub door: Vec<Verdict>,
    pub straight: Vec<Verdict>,
    pub diagonal: Vec<Verdict>,
}

/// Everything the inference layer derives from one experiment record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentInference {
    pub id: String,
    pub estimates: EstimateTable,
    pub groups: GroupTable,
    pub intervals: IntervalTable,
    pub verdicts: VerdictTable,
}

impl ExperimentInference {
    /// Runs the full inference pipeline over one experiment record.
    ///
    /// Never fails: zero totals, zero counts, and empty groups all map to
    /// the defined fallback values of the underlying estimators.
    #[must_use]
    pub fn analyze(record: &ExperimentRecord) -> Self {
        let total = record.total;

        let door_probs = Door::ALL.map(|door| (door, proportion::estimate(record.doors.get(door), total)));
        let direction_probs = Direction::ALL
            .map(|direction| (direction, proportion::estimate(record.directions.get(direction), total)));
        let straight_probs = Direction::STRAIGHT
            .map(|direction| (direction, proportion::estimate(record.directions.get(direction), total)));
        let diagonal_probs = Direction::DIAGONAL
            .map(|direction| (direction, proportion::estimate(record.directions.get(direction), total)));

        let straight_spread = GroupSpread::new(straight_probs.iter().map(|&(_, p)| p));
        let diagonal_spread = GroupSpread::new(diagonal_probs.iter().map(|&(_, p)| p));

        let groups = GroupTable {
            door: group_statistics("doors", &door_probs),
            straight: named_statistics("straight-directions", &straight_probs, straight_spread),
            diagonal: named_statistics("diagonal-directions", &diagonal_probs, diagonal_spread),
            combined_direction_std_pct: spread::combined_std_pct(&straight_spread, &diagonal_spread),
        };

        let estimates = EstimateTable {
            doors: estimate_table(&door_probs),
            directions: estimate_table(&direction_probs),
        };

        let intervals = IntervalTable {
            doors: Door::ALL
                .map(|door| interval_for(door, record.doors.get(door), total, DOOR_INTERVAL_ALPHA))
                .to_vec(),
            directions: Direction::ALL
                .map(|direction| {
                    interval_for(
                        direction,
                        record.directions.get(direction),
                        total,
                        DIRECTION_INTERVAL_ALPHA,
                    )
                })
                .to_vec(),
        };

        let verdicts = VerdictTable {
            door: verdicts_for(&Door::ALL.map(|door| (door, record.doors.get(door)))),
            straight: verdicts_for(
                &Direction::STRAIGHT.map(|direction| (direction, record.directions.get(direction))),
            ),
            diagonal: verdicts_for(
                &Direction::DIAGONAL.map(|direction| (direction, record.directions.get(direction))),
            ),
        };

        Self {
            id: record.id.clone(),
            estimates,
            groups,
            intervals,
            verdicts,
        }
    }
}

fn estimate_table<T>(probs: &[(T, f64)]) -> Vec<CategoryEstimate>
where
    T: Display + Copy,
{
    probs
        .iter()
        .map(|&(category, probability)| CategoryEstimate {
            label: category.to_string(),
            probability,
        })
        .collect()
}

fn group_statistics<T>(name: &str, probs: &[(T, f64)]) -> GroupStatistics
where
    T: Display + Copy,
{
    let group_spread = GroupSpread::new(probs.iter().map(|&(_, p)| p));
    named_statistics(name, probs, group_spread)
}

fn named_statistics<T>(name: &str, probs: &[(T, f64)], group_spread: GroupSpread) -> GroupStatistics
where
    T: Display + Copy,
{
    GroupStatistics {
        name: name.to_owned(),
        mean: group_spread.mean,
        deviations: probs
            .iter()
            .map(|&(category, probability)| CategoryDeviation {
                label: category.to_string(),
                deviation_pct: group_spread.deviation_pct(probability),
            })
            .collect(),
        variance_pct2: group_spread.variance_pct2,
        std_pct: group_spread.std_pct,
    }
}

fn interval_for<T>(category: T, count: u64, total: u64, alpha: f64) -> CategoryInterval
where
    T: Display,
{
    let interval = WilsonInterval::new(count, total, alpha);
    let margin = interval.margin();
    CategoryInterval {
        label: category.to_string(),
        estimate: interval.estimate,
        lower: interval.lower,
        upper: interval.upper,
        margin,
        narrow: margin <= NARROW_MARGIN,
    }
}

fn verdicts_for<T>(counts: &[(T, u64)]) -> Vec<Verdict>
where
    T: Display + Copy,
{
    pairwise::compare_group(counts, OVERALL_ALPHA)
        .into_iter()
        .map(|verdict| {
            let PairVerdict {
                winner,
                loser,
                winner_count,
                loser_count,
                p_value,
                diff,
            } = verdict;
            Verdict {
                winner: winner.to_string(),
                loser: loser.to_string(),
                winner_count,
                loser_count,
                p_value,
                diff,
            }
        })
        .collect()
}
