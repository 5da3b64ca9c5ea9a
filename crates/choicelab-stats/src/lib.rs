//! Statistical inference utilities for the Choicelab project.
//!
//! This crate implements the numeric core used to judge categorical choice
//! experiments:
//!
//! - **Proportion estimation**: Convert raw category counts into probability
//!   estimates with a fixed zero-trial fallback
//! - **Group spread**: Mean, deviation, variance, and standard deviation of
//!   probabilities within a category group, excluding structurally absent
//!   categories
//! - **Wilson score intervals**: Confidence intervals for binomial
//!   proportions that stay well-behaved near 0 and 1
//! - **Pairwise significance testing**: One-sided exact binomial tests
//!   between all category pairs in a group, Bonferroni-corrected
//!
//! All computation is pure and stateless: no I/O, no shared state, and no
//! signaled errors. Degenerate inputs (zero trials, empty groups, tied pairs)
//! map to defined fallback values instead of failures.
//!
//! # Modules
//!
//! - [`proportion`]: Probability estimates from raw counts
//! - [`spread`]: Descriptive statistics for probability groups
//! - [`wilson`]: Wilson score confidence intervals
//! - [`pairwise`]: Pairwise exact binomial significance tests
//!
//! # Examples
//!
//! ## Estimating a category probability
//!
//! ```
//! use choicelab_stats::proportion;
//!
//! assert_eq!(proportion::estimate(25, 100), 0.25);
//! assert_eq!(proportion::estimate(3, 0), 0.0);
//! ```
//!
//! ## Computing a Wilson interval
//!
//! ```
//! use choicelab_stats::wilson::WilsonInterval;
//!
//! let interval = WilsonInterval::new(50, 100, 0.05);
//! assert!(interval.lower <= interval.estimate);
//! assert!(interval.estimate <= interval.upper);
//! ```
//!
//! ## Testing all pairs within a group
//!
//! ```
//! use choicelab_stats::pairwise;
//!
//! let counts = [("a", 90_u64), ("b", 10), ("c", 50)];
//! let verdicts = pairwise::compare_group(&counts, 0.05);
//! assert!(verdicts.iter().any(|v| v.winner == "a" && v.loser == "b"));
//! ```

pub mod pairwise;
pub mod proportion;
pub mod spread;
pub mod wilson;
