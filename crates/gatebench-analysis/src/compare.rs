//! Cross-algorithm comparison and plot-series construction
//!
//! Joins records across algorithms by puzzle name and derives the numeric
//! series handed to the external chart renderer, plus the guarded
//! per-record figures (actual space usage, duplicate-pruning efficiency)
//! used by the textual summaries.
//!
//! # Joining policy
//!
//! The join universe is the union of puzzle names present in the two
//! duplicate-tracking variants. The no-duplicate-detection variant
//! frequently fails to terminate on larger puzzles, so it never widens the
//! universe; where it did produce a result its theoretical estimate serves
//! as the common baseline x-value, and a puzzle it never solved falls back
//! to the contributing record's own estimate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    model::TheoreticalModel,
    record::{Algorithm, ResultRecord},
    run_set::{AlgorithmRunSet, Metric, RunCollection},
};

/// Approximate bytes per stored node, used to fold auxiliary memory into a
/// node-equivalent space figure.
pub const BYTES_PER_NODE: f64 = 32.0;

/// Metrics shown in the cross-algorithm comparison block.
pub const COMPARISON_METRICS: [Metric; 3] = [
    Metric::ExecutionTime,
    Metric::ExpandedNodes,
    Metric::MemoryUsage,
];

/// Actual space usage of one record, in node equivalents.
///
/// Expanded nodes, plus reported auxiliary memory at [`BYTES_PER_NODE`]
/// when any was reported.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn actual_space_usage(record: &ResultRecord) -> f64 {
    let expanded = record.expanded_nodes as f64;
    if record.memory_usage_bytes > 0 {
        expanded + record.memory_usage_bytes as f64 / BYTES_PER_NODE
    } else {
        expanded
    }
}

/// Duplicate-pruning efficiency of one record, in percent.
///
/// `generated / (generated + duplicated) * 100`, defined as `0` when the
/// denominator is zero.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn efficiency(record: &ResultRecord) -> f64 {
    let generated = record.generated_nodes as f64;
    let attempted = generated + record.duplicated_nodes as f64;
    if attempted == 0.0 {
        0.0
    } else {
        generated / attempted * 100.0
    }
}

/// Ratio of actual to theoretical space, defined as `0` for a non-positive
/// estimate.
#[must_use]
pub fn space_ratio(actual: f64, theoretical: f64) -> f64 {
    if theoretical > 0.0 {
        actual / theoretical
    } else {
        0.0
    }
}

/// One point of a theoretical-vs-actual series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Puzzle the point belongs to.
    pub puzzle_name: String,
    /// Theoretical estimate (x-axis).
    pub x: f64,
    /// Observed value (y-axis).
    pub y: f64,
}

/// A series of points for one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSeries {
    /// Algorithm the points belong to.
    pub algorithm: Algorithm,
    /// Points sorted by puzzle name.
    pub points: Vec<SeriesPoint>,
}

/// Space series for one algorithm against its own theoretical estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceSeries {
    /// Algorithm the series describes.
    pub algorithm: Algorithm,
    /// x = primary estimate, y = expanded nodes.
    pub expanded: Vec<SeriesPoint>,
    /// x = primary estimate, y = auxiliary memory in node equivalents.
    /// Empty when no record of this algorithm reported memory.
    pub memory_nodes: Vec<SeriesPoint>,
}

/// Builds the per-algorithm space series (theoretical vs expanded nodes,
/// and theoretical vs memory node equivalents).
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn space_series(run_set: &AlgorithmRunSet) -> SpaceSeries {
    let mut expanded = Vec::new();
    let mut memory_nodes = Vec::new();
    let any_memory = run_set
        .records()
        .iter()
        .any(|e| e.record.memory_usage_bytes > 0);

    for evaluated in run_set.records() {
        let Some(estimate) = evaluated.estimates.primary_space() else {
            continue;
        };
        expanded.push(SeriesPoint {
            puzzle_name: evaluated.record.puzzle_name.clone(),
            x: estimate,
            y: evaluated.record.expanded_nodes as f64,
        });
        if any_memory {
            memory_nodes.push(SeriesPoint {
                puzzle_name: evaluated.record.puzzle_name.clone(),
                x: estimate,
                y: evaluated.record.memory_usage_bytes as f64 / BYTES_PER_NODE,
            });
        }
    }

    SpaceSeries {
        algorithm: run_set.algorithm(),
        expanded,
        memory_nodes,
    }
}

/// Builds the joined comparative space series.
///
/// Every record whose puzzle is in the join universe contributes exactly
/// one point to its algorithm's series: x is the no-duplicate-detection
/// baseline estimate for the puzzle when available, the record's own
/// primary estimate otherwise; y is [`actual_space_usage`].
#[must_use]
pub fn comparative_space_series(collection: &RunCollection) -> Vec<AlgorithmSeries> {
    let universe = join_universe(collection);
    let baseline = collection.get(Algorithm::NoDuplicateDetection);

    collection
        .run_sets()
        .iter()
        .map(|run_set| {
            let points = run_set
                .records()
                .iter()
                .filter(|e| universe.contains(e.record.puzzle_name.as_str()))
                .filter_map(|e| {
                    let x = baseline
                        .and_then(|b| b.find(&e.record.puzzle_name))
                        .and_then(|b| b.estimates.primary_space())
                        .or_else(|| e.estimates.primary_space())?;
                    Some(SeriesPoint {
                        puzzle_name: e.record.puzzle_name.clone(),
                        x,
                        y: actual_space_usage(&e.record),
                    })
                })
                .collect();
            AlgorithmSeries {
                algorithm: run_set.algorithm(),
                points,
            }
        })
        .collect()
}

/// Puzzle names eligible for the comparative join: everything solved by a
/// duplicate-tracking variant.
fn join_universe(collection: &RunCollection) -> BTreeSet<&str> {
    collection
        .run_sets()
        .iter()
        .filter(|s| s.algorithm().tracks_duplicates())
        .flat_map(|s| s.records().iter().map(|e| e.record.puzzle_name.as_str()))
        .collect()
}

/// Builds per-algorithm series of one theoretical model against generated
/// nodes. Records for which the model is undefined are skipped; algorithms
/// with no remaining points are omitted.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn model_series(collection: &RunCollection, model: TheoreticalModel) -> Vec<AlgorithmSeries> {
    collection
        .run_sets()
        .iter()
        .filter_map(|run_set| {
            let points: Vec<_> = run_set
                .records()
                .iter()
                .filter_map(|e| {
                    let x = e.estimates.get(model)?;
                    Some(SeriesPoint {
                        puzzle_name: e.record.puzzle_name.clone(),
                        x,
                        y: e.record.generated_nodes as f64,
                    })
                })
                .collect();
            (!points.is_empty()).then(|| AlgorithmSeries {
                algorithm: run_set.algorithm(),
                points,
            })
        })
        .collect()
}

/// A series restricted to strictly positive values, for log-scale
/// rendering, along with the number of points that had to be dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogScaleSeries {
    /// Points with `x > 0` and `y > 0`.
    pub points: Vec<SeriesPoint>,
    /// Points excluded because either coordinate was non-positive.
    pub dropped_nonpositive: usize,
}

/// Restricts a series to strictly positive values.
///
/// Log-scale rendering cannot represent non-positive values; they are
/// excluded here and counted, never passed through silently.
#[must_use]
pub fn filter_positive(points: Vec<SeriesPoint>) -> LogScaleSeries {
    let total = points.len();
    let points: Vec<_> = points
        .into_iter()
        .filter(|p| p.x > 0.0 && p.y > 0.0)
        .collect();
    let dropped_nonpositive = total - points.len();
    LogScaleSeries {
        points,
        dropped_nonpositive,
    }
}

/// Mean of one metric per algorithm, for the cross-algorithm comparison
/// block. Algorithms without a sample for the metric are omitted.
#[must_use]
pub fn mean_by_algorithm(collection: &RunCollection, metric: Metric) -> Vec<(Algorithm, f64)> {
    collection
        .run_sets()
        .iter()
        .filter_map(|run_set| {
            let summary = run_set.summarize(metric)?;
            Some((run_set.algorithm(), summary.mean))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(algorithm: Algorithm, puzzle: &str) -> ResultRecord {
        ResultRecord {
            puzzle_name: puzzle.to_owned(),
            algorithm,
            execution_time: 1.0,
            expanded_nodes: 100,
            generated_nodes: 400,
            duplicated_nodes: 100,
            memory_usage_bytes: 0,
            num_pieces: 2,
            solution_steps: 5,
            empty_spaces: 3,
            solution_path: Some("R1D".to_owned()),
            solved_by_width: (algorithm == Algorithm::IterativeWidening).then_some(2),
            nodes_per_second: None,
        }
    }

    #[test]
    fn actual_space_includes_memory_only_when_reported() {
        let mut rec = record(Algorithm::DuplicateDetection, "a");
        assert_eq!(actual_space_usage(&rec), 100.0);

        rec.memory_usage_bytes = 6400;
        assert_eq!(actual_space_usage(&rec), 100.0 + 200.0);
    }

    #[test]
    fn efficiency_is_guarded_against_zero_denominator() {
        let mut rec = record(Algorithm::DuplicateDetection, "a");
        rec.generated_nodes = 0;
        rec.duplicated_nodes = 0;
        assert_eq!(efficiency(&rec), 0.0);

        rec.generated_nodes = 400;
        rec.duplicated_nodes = 100;
        assert_eq!(efficiency(&rec), 80.0);
    }

    #[test]
    fn space_ratio_is_zero_for_non_positive_estimate() {
        assert_eq!(space_ratio(10.0, 0.0), 0.0);
        assert_eq!(space_ratio(10.0, 4.0), 2.5);
    }

    #[test]
    fn join_universe_excludes_no_duplicate_detection_puzzles() {
        let collection = RunCollection::from_records([
            record(Algorithm::NoDuplicateDetection, "a"),
            record(Algorithm::NoDuplicateDetection, "z"),
            record(Algorithm::DuplicateDetection, "a"),
            record(Algorithm::DuplicateDetection, "b"),
            record(Algorithm::IterativeWidening, "b"),
            record(Algorithm::IterativeWidening, "c"),
        ]);

        let series = comparative_space_series(&collection);
        let by_algorithm = |algorithm| {
            series
                .iter()
                .find(|s| s.algorithm == algorithm)
                .map(|s| {
                    s.points
                        .iter()
                        .map(|p| p.puzzle_name.as_str())
                        .collect::<Vec<_>>()
                })
                .unwrap()
        };

        // "z" was only solved without duplicate detection; it is outside the
        // universe and contributes nothing.
        assert_eq!(by_algorithm(Algorithm::NoDuplicateDetection), ["a"]);
        assert_eq!(by_algorithm(Algorithm::DuplicateDetection), ["a", "b"]);
        assert_eq!(by_algorithm(Algorithm::IterativeWidening), ["b", "c"]);
    }

    #[test]
    fn baseline_estimate_is_substituted_when_available() {
        let collection = RunCollection::from_records([
            record(Algorithm::NoDuplicateDetection, "a"),
            record(Algorithm::DuplicateDetection, "a"),
            record(Algorithm::DuplicateDetection, "b"),
        ]);

        let baseline_estimate = collection
            .get(Algorithm::NoDuplicateDetection)
            .unwrap()
            .find("a")
            .unwrap()
            .estimates
            .primary_space()
            .unwrap();
        let own_estimate = collection
            .get(Algorithm::DuplicateDetection)
            .unwrap()
            .find("b")
            .unwrap()
            .estimates
            .primary_space()
            .unwrap();

        let series = comparative_space_series(&collection);
        let dup = series
            .iter()
            .find(|s| s.algorithm == Algorithm::DuplicateDetection)
            .unwrap();

        // "a" is joined against the baseline; "b" falls back to its own
        // estimate.
        assert_eq!(dup.points[0].x, baseline_estimate);
        assert_eq!(dup.points[1].x, own_estimate);
    }

    #[test]
    fn model_series_skips_records_without_the_model() {
        let collection = RunCollection::from_records([
            record(Algorithm::DuplicateDetection, "a"),
            record(Algorithm::IterativeWidening, "a"),
        ]);

        let series = model_series(&collection, TheoreticalModel::IwComplexity);
        // Only the iterative-widening record carries a width.
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].algorithm, Algorithm::IterativeWidening);
        assert_eq!(series[0].points.len(), 1);
        assert_eq!(series[0].points[0].y, 400.0);
    }

    #[test]
    fn filter_positive_counts_dropped_points() {
        let points = vec![
            SeriesPoint {
                puzzle_name: "a".to_owned(),
                x: 1.0,
                y: 2.0,
            },
            SeriesPoint {
                puzzle_name: "b".to_owned(),
                x: 0.0,
                y: 2.0,
            },
            SeriesPoint {
                puzzle_name: "c".to_owned(),
                x: 3.0,
                y: 0.0,
            },
        ];
        let filtered = filter_positive(points);
        assert_eq!(filtered.points.len(), 1);
        assert_eq!(filtered.dropped_nonpositive, 2);
        assert_eq!(filtered.points[0].puzzle_name, "a");
    }

    #[test]
    fn mean_by_algorithm_covers_each_run_set() {
        let collection = RunCollection::from_records([
            record(Algorithm::DuplicateDetection, "a"),
            record(Algorithm::IterativeWidening, "a"),
        ]);

        let means = mean_by_algorithm(&collection, Metric::ExpandedNodes);
        assert_eq!(
            means,
            [
                (Algorithm::DuplicateDetection, 100.0),
                (Algorithm::IterativeWidening, 100.0),
            ]
        );
    }
}
