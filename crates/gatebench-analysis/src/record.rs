//! Record model for parsed benchmark reports
//!
//! This module provides the data structures shared by the whole pipeline:
//! the fixed enumeration of solver variants and the immutable record parsed
//! from one report.
//!
//! # Identity
//!
//! A record is identified by its `(algorithm, puzzle_name)` pair. Puzzle
//! names are derived by the caller from the report's source identifier (for
//! file-based reports, the file stem minus the `algoN_` prefix), so two
//! solver runs over the same puzzle instance share a puzzle name and can be
//! joined by the comparison layer.
//!
//! # Validity
//!
//! A [`ResultRecord`] only exists if every required field parsed
//! successfully; partial records are never constructed. Optional fields are
//! `Option`s, absent when the source report did not include them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The three search-algorithm variants that produce benchmark reports.
///
/// The enum ordering (and thus `Ord`) matches the report-file prefixes
/// `algo1`..`algo3`, which keeps all grouped output in a stable order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Algorithm {
    /// Breadth-first search without duplicate pruning (`algo1`).
    #[serde(rename = "algo1")]
    NoDuplicateDetection,
    /// Search with full visited-state tracking (`algo2`).
    #[serde(rename = "algo2")]
    DuplicateDetection,
    /// Iterative-widening search, tracking states up to a novelty-width
    /// bound (`algo3`).
    #[serde(rename = "algo3")]
    IterativeWidening,
}

impl Algorithm {
    /// All variants in presentation order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::NoDuplicateDetection,
        Algorithm::DuplicateDetection,
        Algorithm::IterativeWidening,
    ];

    /// Report-file prefix used by the solver runners (`algo1_<puzzle>.txt`).
    #[must_use]
    pub fn file_prefix(self) -> &'static str {
        match self {
            Algorithm::NoDuplicateDetection => "algo1",
            Algorithm::DuplicateDetection => "algo2",
            Algorithm::IterativeWidening => "algo3",
        }
    }

    /// Human-readable label for report headings and chart legends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::NoDuplicateDetection => "Algorithm 1 (No Duplicate Detection)",
            Algorithm::DuplicateDetection => "Algorithm 2 (Duplicate Detection)",
            Algorithm::IterativeWidening => "Algorithm 3 (Iterative Widening)",
        }
    }

    /// Short label (`Algorithm 1`..`Algorithm 3`).
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Algorithm::NoDuplicateDetection => "Algorithm 1",
            Algorithm::DuplicateDetection => "Algorithm 2",
            Algorithm::IterativeWidening => "Algorithm 3",
        }
    }

    /// Whether this variant tracks visited states.
    ///
    /// Only duplicate-tracking variants report a meaningful duplicated-node
    /// count, so efficiency figures are restricted to them.
    #[must_use]
    pub fn tracks_duplicates(self) -> bool {
        !matches!(self, Algorithm::NoDuplicateDetection)
    }

    /// Resolves a report-file prefix back to its variant.
    #[must_use]
    pub fn from_file_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.file_prefix() == prefix)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_label())
    }
}

/// Error returned when a string is not a recognized algorithm prefix.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown algorithm '{name}' (expected algo1, algo2, or algo3)")]
pub struct UnknownAlgorithmError {
    /// The string that failed to resolve.
    pub name: String,
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_file_prefix(s).ok_or_else(|| UnknownAlgorithmError { name: s.to_owned() })
    }
}

/// One parsed benchmark report.
///
/// Immutable after construction; theoretical estimates are attached
/// alongside the record by the model layer
/// ([`EvaluatedRecord`](crate::model::EvaluatedRecord)), never written back
/// into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Puzzle instance identifier, shared across algorithms.
    pub puzzle_name: String,
    /// The solver variant that produced this report.
    pub algorithm: Algorithm,
    /// Wall-clock solve time in seconds.
    pub execution_time: f64,
    /// Nodes popped from the frontier for expansion.
    pub expanded_nodes: u64,
    /// Successor nodes created during the search.
    pub generated_nodes: u64,
    /// Successors that duplicated an already-seen state.
    pub duplicated_nodes: u64,
    /// Auxiliary memory reported by the solver, in bytes.
    pub memory_usage_bytes: u64,
    /// Number of pieces in the puzzle instance.
    pub num_pieces: u64,
    /// Number of moves in the reported solution.
    pub solution_steps: u64,
    /// Number of empty spaces on the board.
    pub empty_spaces: u64,
    /// Move sequence of the solution, absent when the puzzle was unsolved.
    pub solution_path: Option<String>,
    /// Novelty width at which the iterative-widening variant solved the
    /// puzzle; absent for the other variants.
    pub solved_by_width: Option<u64>,
    /// Expansion throughput, present only when the report includes it.
    pub nodes_per_second: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                Algorithm::from_file_prefix(algorithm.file_prefix()),
                Some(algorithm)
            );
            assert_eq!(
                algorithm.file_prefix().parse::<Algorithm>().unwrap(),
                algorithm
            );
        }
    }

    #[test]
    fn unknown_prefix_is_rejected() {
        assert!(Algorithm::from_file_prefix("algo4").is_none());
        let err = "bfs".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.name, "bfs");
    }

    #[test]
    fn presentation_order_follows_prefixes() {
        let mut shuffled = [
            Algorithm::IterativeWidening,
            Algorithm::NoDuplicateDetection,
            Algorithm::DuplicateDetection,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Algorithm::ALL);
    }
}
