//! Candidate evaluation for Rota.
//!
//! This crate decides whether a schedule is admissible and how good it is:
//! - [`ConstraintEvaluator`] runs the hard checks in a fixed order and
//!   reports the first [`Violation`]
//! - [`HeuristicSet`] computes the weighted fairness score of valid schedules
//! - [`DiscardTally`] counts rejections per [`DiscardReason`]
//!
//! Everything here is pure: the same problem, configuration and schedule
//! always produce the same verdict and bit-identical scores.

pub mod constraint;
pub mod heuristic;
pub mod tally;

pub use constraint::{ConstraintEvaluator, DiscardReason, Violation};
pub use heuristic::{HeuristicKind, HeuristicScore, HeuristicSet};
pub use tally::DiscardTally;
