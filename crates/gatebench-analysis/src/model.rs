//! Theoretical complexity models
//!
//! Computes closed-form upper-bound estimates of search cost from a record's
//! own fields. Each algorithm variant has one primary space model, and a set
//! of cross-cutting auxiliary models applies to every variant whose required
//! fields are present.
//!
//! All formulas are evaluated in `f64` and capped, so an estimate is always
//! finite even for configuration spaces that overflow any integer type. A
//! model whose precondition is unmet (the iterative-widening models without
//! a solved-by width) is omitted from the result map, never defaulted to
//! zero.
//!
//! The caps and multipliers are empirically chosen constants carried over
//! from the measurement campaign; they are exposed as named constants rather
//! than re-derived.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::{Algorithm, ResultRecord};

/// Cap on the no-duplicate-detection queue-size estimate.
pub const QUEUE_CAP: f64 = 1e10;

/// Cap on configuration-space estimates (`state_space`, `exponential_width`).
pub const STATE_SPACE_CAP: f64 = 1e15;

/// Depth cap for the no-duplicate-detection blowup estimate. Without
/// duplicate pruning the queue is unbounded, so deeper solutions would
/// overflow any report-time arithmetic.
pub const DEPTH_CAP: u64 = 10;

/// Practical bound multiplier for the full-duplicate-detection variant.
pub const FULL_GENERATED_FACTOR: f64 = 2.0;

/// Practical bound multiplier for the width-limited variant.
pub const WIDTH_GENERATED_FACTOR: f64 = 1.5;

/// Moves available to each piece (one per direction), giving the branching
/// factor `num_pieces * MOVES_PER_PIECE`.
pub const MOVES_PER_PIECE: u64 = 4;

/// The theoretical complexity models evaluated per record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TheoreticalModel {
    /// The algorithm-specific primary space model.
    PrimarySpace,
    /// Total configuration space: `empty_spaces ^ num_pieces`, capped.
    StateSpace,
    /// Search depth times branching factor.
    DepthBranching,
    /// Novelty-width complexity proxy: `pieces * empty_spaces * width`.
    IwComplexity,
    /// Combined proxy: `pieces * steps * empty_spaces * width`.
    Combined,
    /// Width-constrained configuration space: `empty_spaces ^ width`, capped.
    ExponentialWidth,
}

impl TheoreticalModel {
    /// All models in presentation order.
    pub const ALL: [TheoreticalModel; 6] = [
        TheoreticalModel::PrimarySpace,
        TheoreticalModel::StateSpace,
        TheoreticalModel::DepthBranching,
        TheoreticalModel::IwComplexity,
        TheoreticalModel::Combined,
        TheoreticalModel::ExponentialWidth,
    ];

    /// Stable identifier used in emitted datasets.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            TheoreticalModel::PrimarySpace => "primary_space",
            TheoreticalModel::StateSpace => "state_space",
            TheoreticalModel::DepthBranching => "depth_branching",
            TheoreticalModel::IwComplexity => "iw_complexity",
            TheoreticalModel::Combined => "combined",
            TheoreticalModel::ExponentialWidth => "exponential_width",
        }
    }

    /// Axis label for chart legends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TheoreticalModel::PrimarySpace => "Theoretical Space Usage",
            TheoreticalModel::StateSpace => "Empty Spaces ^ Pieces",
            TheoreticalModel::DepthBranching => "Steps × Branching Factor",
            TheoreticalModel::IwComplexity => "Pieces × Empty Spaces × IW Width",
            TheoreticalModel::Combined => "Pieces × Steps × Empty Spaces × IW Width",
            TheoreticalModel::ExponentialWidth => "Empty Spaces ^ IW Width",
        }
    }
}

/// The theoretical estimates computed for one record, keyed by model.
///
/// Models whose preconditions are unmet are simply not present in the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TheoreticalEstimates {
    estimates: BTreeMap<TheoreticalModel, f64>,
}

impl TheoreticalEstimates {
    /// Evaluates every applicable model for a record.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatebench_analysis::{
    ///     model::{TheoreticalEstimates, TheoreticalModel},
    ///     parser,
    ///     record::Algorithm,
    /// };
    ///
    /// let text = "\
    /// Execution time: 0.5
    /// Expanded nodes: 10
    /// Generated nodes: 40
    /// Duplicated nodes: 5
    /// Auxiliary memory usage (bytes): 0
    /// Number of pieces in the puzzle: 2
    /// Number of steps in solution: 4
    /// Number of empty spaces: 3
    /// ";
    /// let record = parser::parse_report(Algorithm::DuplicateDetection, "gate01", text).unwrap();
    /// let estimates = TheoreticalEstimates::for_record(&record);
    ///
    /// // min(3^2, 40 * 2)
    /// assert_eq!(estimates.get(TheoreticalModel::PrimarySpace), Some(9.0));
    /// // No solved-by width, so the width models are omitted.
    /// assert_eq!(estimates.get(TheoreticalModel::IwComplexity), None);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn for_record(record: &ResultRecord) -> Self {
        let pieces = record.num_pieces as f64;
        let steps = record.solution_steps as f64;
        let empty = record.empty_spaces as f64;
        let branching = (record.num_pieces * MOVES_PER_PIECE) as f64;

        let mut estimates = BTreeMap::new();

        if let Some(primary) = primary_space(record) {
            estimates.insert(TheoreticalModel::PrimarySpace, primary);
        }

        estimates.insert(
            TheoreticalModel::StateSpace,
            empty.powf(pieces).min(STATE_SPACE_CAP),
        );
        estimates.insert(TheoreticalModel::DepthBranching, steps * branching);

        if let Some(width) = record.solved_by_width {
            let width = width as f64;
            estimates.insert(TheoreticalModel::IwComplexity, pieces * empty * width);
            estimates.insert(
                TheoreticalModel::Combined,
                pieces * steps * empty * width,
            );
            estimates.insert(
                TheoreticalModel::ExponentialWidth,
                empty.powf(width).min(STATE_SPACE_CAP),
            );
        }

        Self { estimates }
    }

    /// The estimate for one model, if its precondition was met.
    #[must_use]
    pub fn get(&self, model: TheoreticalModel) -> Option<f64> {
        self.estimates.get(&model).copied()
    }

    /// The algorithm-specific primary space estimate.
    #[must_use]
    pub fn primary_space(&self) -> Option<f64> {
        self.get(TheoreticalModel::PrimarySpace)
    }

    /// Iterates over `(model, estimate)` pairs in model order.
    pub fn iter(&self) -> impl Iterator<Item = (TheoreticalModel, f64)> + '_ {
        self.estimates.iter().map(|(model, value)| (*model, *value))
    }
}

/// The primary space model for a record's own algorithm.
///
/// Returns `None` when the model's precondition is unmet (the width-limited
/// variant without a solved-by width).
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn primary_space(record: &ResultRecord) -> Option<f64> {
    let empty = record.empty_spaces as f64;
    let generated = record.generated_nodes as f64;

    let estimate = match record.algorithm {
        Algorithm::NoDuplicateDetection => {
            // Worst-case queue growth: branching factor to the solution
            // depth, with the depth capped.
            let branching = (record.num_pieces * MOVES_PER_PIECE) as f64;
            let depth = record.solution_steps.min(DEPTH_CAP) as f64;
            branching.powf(depth).min(QUEUE_CAP)
        }
        Algorithm::DuplicateDetection => {
            let pieces = record.num_pieces as f64;
            empty
                .powf(pieces)
                .min(generated * FULL_GENERATED_FACTOR)
        }
        Algorithm::IterativeWidening => {
            let width = record.solved_by_width? as f64;
            empty
                .powf(width)
                .min(generated * WIDTH_GENERATED_FACTOR)
        }
    };
    Some(estimate)
}

/// A record together with its theoretical estimates.
///
/// The record stays immutable; annotation attaches the estimates alongside
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatedRecord {
    /// The parsed record.
    pub record: ResultRecord,
    /// Theoretical estimates computed from the record's fields.
    pub estimates: TheoreticalEstimates,
}

impl EvaluatedRecord {
    /// Annotates a record with its theoretical estimates.
    #[must_use]
    pub fn new(record: ResultRecord) -> Self {
        let estimates = TheoreticalEstimates::for_record(&record);
        Self { record, estimates }
    }
}
