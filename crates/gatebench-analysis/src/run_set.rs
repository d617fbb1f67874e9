//! Grouping of records into per-algorithm run sets
//!
//! A [`RunCollection`] groups valid records by algorithm and keeps each
//! group sorted by puzzle name, so downstream output is deterministic no
//! matter what order the reports were read in. Each [`AlgorithmRunSet`]
//! exposes per-metric numeric samples for the statistics layer and the
//! solved-by-width distribution.

use std::collections::BTreeMap;

use gatebench_stats::descriptive::StatSummary;

use crate::{
    model::EvaluatedRecord,
    record::{Algorithm, ResultRecord},
};

/// The numeric metrics tracked per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    ExecutionTime,
    ExpandedNodes,
    GeneratedNodes,
    DuplicatedNodes,
    MemoryUsage,
    NumPieces,
    SolutionSteps,
    EmptySpaces,
    NodesPerSecond,
}

impl Metric {
    /// All metrics in presentation order.
    pub const ALL: [Metric; 9] = [
        Metric::ExecutionTime,
        Metric::ExpandedNodes,
        Metric::GeneratedNodes,
        Metric::DuplicatedNodes,
        Metric::MemoryUsage,
        Metric::NumPieces,
        Metric::SolutionSteps,
        Metric::EmptySpaces,
        Metric::NodesPerSecond,
    ];

    /// Section heading used in the textual summary.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::ExecutionTime => "EXECUTION TIME (seconds)",
            Metric::ExpandedNodes => "EXPANDED NODES",
            Metric::GeneratedNodes => "GENERATED NODES",
            Metric::DuplicatedNodes => "DUPLICATED NODES",
            Metric::MemoryUsage => "AUXILIARY MEMORY USAGE (bytes)",
            Metric::NumPieces => "NUMBER OF PIECES",
            Metric::SolutionSteps => "SOLUTION STEPS",
            Metric::EmptySpaces => "NUMBER OF EMPTY SPACES",
            Metric::NodesPerSecond => "NODES EXPANDED PER SECOND",
        }
    }

    /// The metric's value for one record, absent when the record did not
    /// report it.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn value(self, record: &ResultRecord) -> Option<f64> {
        match self {
            Metric::ExecutionTime => Some(record.execution_time),
            Metric::ExpandedNodes => Some(record.expanded_nodes as f64),
            Metric::GeneratedNodes => Some(record.generated_nodes as f64),
            Metric::DuplicatedNodes => Some(record.duplicated_nodes as f64),
            Metric::MemoryUsage => Some(record.memory_usage_bytes as f64),
            Metric::NumPieces => Some(record.num_pieces as f64),
            Metric::SolutionSteps => Some(record.solution_steps as f64),
            Metric::EmptySpaces => Some(record.empty_spaces as f64),
            Metric::NodesPerSecond => record.nodes_per_second,
        }
    }
}

/// Count of records solved at one novelty-width value.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthCount {
    /// The observed width value.
    pub width: u64,
    /// Number of records solved at this width.
    pub count: usize,
    /// Share of the algorithm's total valid record count, in percent.
    pub percentage: f64,
}

/// The valid records of one algorithm, sorted by puzzle name.
#[derive(Debug, Clone)]
pub struct AlgorithmRunSet {
    algorithm: Algorithm,
    records: Vec<EvaluatedRecord>,
}

impl AlgorithmRunSet {
    fn new(algorithm: Algorithm, mut records: Vec<EvaluatedRecord>) -> Self {
        records.sort_by(|a, b| a.record.puzzle_name.cmp(&b.record.puzzle_name));
        Self { algorithm, records }
    }

    /// The algorithm all records in this set belong to.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The records, sorted by puzzle name.
    #[must_use]
    pub fn records(&self) -> &[EvaluatedRecord] {
        &self.records
    }

    /// Number of valid records in this set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether this set holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up the record for one puzzle.
    #[must_use]
    pub fn find(&self, puzzle_name: &str) -> Option<&EvaluatedRecord> {
        self.records
            .binary_search_by(|e| e.record.puzzle_name.as_str().cmp(puzzle_name))
            .ok()
            .map(|i| &self.records[i])
    }

    /// The numeric sample for one metric, skipping records that did not
    /// report it.
    #[must_use]
    pub fn metric_sample(&self, metric: Metric) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|e| metric.value(&e.record))
            .collect()
    }

    /// Summary statistics for one metric; `None` when no record reported it.
    #[must_use]
    pub fn summarize(&self, metric: Metric) -> Option<StatSummary> {
        StatSummary::new(self.metric_sample(metric))
    }

    /// Count and percentage of records solved at each observed width,
    /// percentages over this set's total valid record count.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn width_distribution(&self) -> Vec<WidthCount> {
        let mut counts = BTreeMap::<u64, usize>::new();
        for evaluated in &self.records {
            if let Some(width) = evaluated.record.solved_by_width {
                *counts.entry(width).or_default() += 1;
            }
        }
        let total = self.records.len() as f64;
        counts
            .into_iter()
            .map(|(width, count)| WidthCount {
                width,
                count,
                percentage: 100.0 * count as f64 / total,
            })
            .collect()
    }
}

/// All run sets of one analysis run, ordered by algorithm.
///
/// Only algorithms with at least one valid record are present.
#[derive(Debug, Clone, Default)]
pub struct RunCollection {
    run_sets: Vec<AlgorithmRunSet>,
}

impl RunCollection {
    /// Groups records by algorithm.
    ///
    /// Grouping is a pure reduction over the record set; the input order has
    /// no effect on the result.
    #[must_use]
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ResultRecord>,
    {
        let mut by_algorithm = BTreeMap::<Algorithm, Vec<EvaluatedRecord>>::new();
        for record in records {
            by_algorithm
                .entry(record.algorithm)
                .or_default()
                .push(EvaluatedRecord::new(record));
        }
        let run_sets = by_algorithm
            .into_iter()
            .map(|(algorithm, records)| AlgorithmRunSet::new(algorithm, records))
            .collect();
        Self { run_sets }
    }

    /// The run sets in algorithm order.
    #[must_use]
    pub fn run_sets(&self) -> &[AlgorithmRunSet] {
        &self.run_sets
    }

    /// The run set for one algorithm, if it has any records.
    #[must_use]
    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmRunSet> {
        self.run_sets.iter().find(|s| s.algorithm() == algorithm)
    }

    /// Total number of valid records across all algorithms.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.run_sets.iter().map(AlgorithmRunSet::len).sum()
    }

    /// Whether the collection holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.run_sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(algorithm: Algorithm, puzzle: &str, width: Option<u64>) -> ResultRecord {
        ResultRecord {
            puzzle_name: puzzle.to_owned(),
            algorithm,
            execution_time: 1.0,
            expanded_nodes: 10,
            generated_nodes: 40,
            duplicated_nodes: 4,
            memory_usage_bytes: 0,
            num_pieces: 2,
            solution_steps: 5,
            empty_spaces: 3,
            solution_path: None,
            solved_by_width: width,
            nodes_per_second: None,
        }
    }

    #[test]
    fn groups_by_algorithm_and_sorts_by_puzzle_name() {
        let collection = RunCollection::from_records([
            record(Algorithm::IterativeWidening, "gate09", Some(1)),
            record(Algorithm::DuplicateDetection, "gate02", None),
            record(Algorithm::IterativeWidening, "gate01", Some(2)),
        ]);

        let algorithms: Vec<_> = collection
            .run_sets()
            .iter()
            .map(AlgorithmRunSet::algorithm)
            .collect();
        assert_eq!(
            algorithms,
            [Algorithm::DuplicateDetection, Algorithm::IterativeWidening]
        );

        let iw = collection.get(Algorithm::IterativeWidening).unwrap();
        let puzzles: Vec<_> = iw
            .records()
            .iter()
            .map(|e| e.record.puzzle_name.as_str())
            .collect();
        assert_eq!(puzzles, ["gate01", "gate09"]);
        assert!(iw.find("gate09").is_some());
        assert!(iw.find("gate05").is_none());
    }

    #[test]
    fn grouping_is_input_order_independent() {
        let records = [
            record(Algorithm::DuplicateDetection, "a", None),
            record(Algorithm::DuplicateDetection, "b", None),
            record(Algorithm::NoDuplicateDetection, "a", None),
        ];
        let forward = RunCollection::from_records(records.clone());
        let reversed = RunCollection::from_records(records.into_iter().rev());

        for (a, b) in forward.run_sets().iter().zip(reversed.run_sets()) {
            assert_eq!(a.algorithm(), b.algorithm());
            let names_a: Vec<_> = a.records().iter().map(|e| &e.record.puzzle_name).collect();
            let names_b: Vec<_> = b.records().iter().map(|e| &e.record.puzzle_name).collect();
            assert_eq!(names_a, names_b);
        }
    }

    #[test]
    fn metric_sample_skips_unreported_values() {
        let mut with_throughput = record(Algorithm::DuplicateDetection, "a", None);
        with_throughput.nodes_per_second = Some(123.0);
        let collection = RunCollection::from_records([
            with_throughput,
            record(Algorithm::DuplicateDetection, "b", None),
        ]);

        let run_set = collection.get(Algorithm::DuplicateDetection).unwrap();
        assert_eq!(run_set.metric_sample(Metric::NodesPerSecond), [123.0]);
        assert_eq!(run_set.metric_sample(Metric::ExpandedNodes).len(), 2);
    }

    #[test]
    fn summarize_returns_none_for_unreported_metric() {
        let collection =
            RunCollection::from_records([record(Algorithm::DuplicateDetection, "a", None)]);
        let run_set = collection.get(Algorithm::DuplicateDetection).unwrap();
        assert!(run_set.summarize(Metric::NodesPerSecond).is_none());
        assert!(run_set.summarize(Metric::ExecutionTime).is_some());
    }

    #[test]
    fn width_distribution_percentages_use_total_record_count() {
        let collection = RunCollection::from_records([
            record(Algorithm::IterativeWidening, "a", Some(1)),
            record(Algorithm::IterativeWidening, "b", Some(1)),
            record(Algorithm::IterativeWidening, "c", Some(2)),
            // Unsolved run: counts toward the total, not toward any width.
            record(Algorithm::IterativeWidening, "d", None),
        ]);

        let distribution = collection
            .get(Algorithm::IterativeWidening)
            .unwrap()
            .width_distribution();
        assert_eq!(
            distribution,
            [
                WidthCount {
                    width: 1,
                    count: 2,
                    percentage: 50.0
                },
                WidthCount {
                    width: 2,
                    count: 1,
                    percentage: 25.0
                },
            ]
        );
    }

    #[test]
    fn empty_collection_has_no_run_sets() {
        let collection = RunCollection::from_records([]);
        assert!(collection.is_empty());
        assert_eq!(collection.total_records(), 0);
    }
}
