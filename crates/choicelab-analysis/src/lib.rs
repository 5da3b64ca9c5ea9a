//! Experiment data model and inference orchestration for Choicelab.
//!
//! A choice experiment records how often a subject picked each of four doors
//! and each of eight movement directions. This crate defines the fixed-shape
//! record types for those counts and drives the `choicelab-stats` inference
//! core over them.
//!
//! # Overview
//!
//! The analysis of one experiment proceeds in one pass:
//!
//! 1. **Load a record** ([`record::ExperimentRecord`]): Identifier, trial
//!    total, door counts, and direction counts
//! 2. **Run inference** ([`inference::ExperimentInference`]): Probability
//!    estimates, group spread statistics, Wilson confidence intervals, and
//!    pairwise significance verdicts
//!
//! Experiments are independent: nothing is shared between records, and the
//! whole pipeline is a pure function of its input.
//!
//! # Category families
//!
//! - **Doors**: Left, Up, Right, Down — one comparison group
//! - **Directions**: eight compass-like choices, partitioned into a
//!   *straight* subgroup (Left, Up, Right, Down) and a *diagonal* subgroup
//!   (Up-Left, Up-Right, Down-Right, Down-Left). The subgroups are compared
//!   internally but never against each other.
//!
//! # Examples
//!
//! ```
//! use choicelab_analysis::{
//!     inference::ExperimentInference,
//!     record::{ChoiceCounts, DoorCounts, ExperimentRecord},
//! };
//!
//! let record = ExperimentRecord::new(
//!     "1a".to_owned(),
//!     ChoiceCounts {
//!         total: 100,
//!         doors: DoorCounts { left: 80, up: 20, right: 50, down: 50 },
//!         directions: Default::default(),
//!     },
//! );
//! let inference = ExperimentInference::analyze(&record);
//! assert!(!inference.verdicts.door.is_empty());
//! ```

pub mod inference;
pub mod record;
