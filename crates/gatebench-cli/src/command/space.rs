//! Space complexity analysis command
//!
//! Compares each algorithm's theoretical space estimate with its actual
//! space usage (expanded nodes plus auxiliary memory), prints the summary
//! statistics, and optionally emits the plot-ready dataset for the external
//! chart renderer.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use gatebench_analysis::{
    compare,
    run_set::{AlgorithmRunSet, Metric, RunCollection},
};
use gatebench_stats::descriptive::StatSummary;

use crate::{
    format::{banner, thousands},
    reports,
    schema::{AlgorithmLogSeries, IndividualSpaceSeries, SpaceDataset},
    util,
};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Args)]
pub(crate) struct SpaceArg {
    /// Directory containing the solver report files
    #[arg(default_value = "output")]
    pub reports_dir: PathBuf,

    /// Write the plot-ready dataset as JSON to this path
    #[arg(long)]
    pub dataset: Option<PathBuf>,
}

pub(crate) fn run(arg: &SpaceArg) -> anyhow::Result<()> {
    eprintln!("Analyzing space complexity...");
    let collection = reports::load_run_collection(&arg.reports_dir)?;

    print_statistics(&collection);

    if let Some(path) = &arg.dataset {
        let dataset = build_dataset(&collection);
        util::Output::open(path.clone())?.write_json(&dataset)?;
        eprintln!("Space dataset written to {}", path.display());
    }
    Ok(())
}

fn print_statistics(collection: &RunCollection) {
    println!();
    println!("{}", banner());
    println!("SPACE COMPLEXITY ANALYSIS SUMMARY");
    println!("{}", banner());

    for run_set in collection.run_sets() {
        println!();
        println!("{}:", run_set.algorithm().label());
        println!("  Total puzzles: {}", run_set.len());

        if let Some(expanded) = run_set.summarize(Metric::ExpandedNodes) {
            println!(
                "  Expanded nodes: min={}, max={}, avg={}",
                thousands(expanded.min, 0),
                thousands(expanded.max, 0),
                thousands(expanded.mean, 0)
            );
        }

        let memory_mb: Vec<_> = run_set
            .metric_sample(Metric::MemoryUsage)
            .into_iter()
            .map(|bytes| bytes / BYTES_PER_MB)
            .collect();
        if let Some(memory) = StatSummary::new(memory_mb) {
            println!(
                "  Auxiliary memory (MB): min={:.2}, max={:.2}, avg={:.2}",
                memory.min, memory.max, memory.mean
            );
        }

        if let Some(theoretical) = StatSummary::new(theoretical_sample(run_set)) {
            println!(
                "  Theoretical space: min={}, max={}, avg={}",
                thousands(theoretical.min, 0),
                thousands(theoretical.max, 0),
                thousands(theoretical.mean, 0)
            );
        }

        if let Some(ratio) = StatSummary::new(ratio_sample(run_set)) {
            println!(
                "  Actual/Theoretical ratio: min={:.4}, max={:.4}, avg={:.4}",
                ratio.min, ratio.max, ratio.mean
            );
        }
    }
}

/// Primary space estimates of the records that have one.
fn theoretical_sample(run_set: &AlgorithmRunSet) -> Vec<f64> {
    run_set
        .records()
        .iter()
        .filter_map(|e| e.estimates.primary_space())
        .collect()
}

/// Expanded nodes over the theoretical estimate, per record.
#[expect(clippy::cast_precision_loss)]
fn ratio_sample(run_set: &AlgorithmRunSet) -> Vec<f64> {
    run_set
        .records()
        .iter()
        .filter_map(|e| {
            let estimate = e.estimates.primary_space()?;
            Some(compare::space_ratio(e.record.expanded_nodes as f64, estimate))
        })
        .collect()
}

fn build_dataset(collection: &RunCollection) -> SpaceDataset {
    let individual = collection
        .run_sets()
        .iter()
        .map(|run_set| {
            let series = compare::space_series(run_set);
            IndividualSpaceSeries {
                algorithm: run_set.algorithm(),
                label: run_set.algorithm().label(),
                expanded: compare::filter_positive(series.expanded),
                memory_nodes: compare::filter_positive(series.memory_nodes),
            }
        })
        .collect();

    let comparative = compare::comparative_space_series(collection)
        .into_iter()
        .map(|series| AlgorithmLogSeries {
            algorithm: series.algorithm,
            label: series.algorithm.label(),
            series: compare::filter_positive(series.points),
        })
        .collect();

    SpaceDataset {
        generated_at: Utc::now(),
        individual,
        comparative,
    }
}

#[cfg(test)]
mod tests {
    use gatebench_analysis::record::{Algorithm, ResultRecord};

    use super::*;

    fn record(algorithm: Algorithm, puzzle: &str) -> ResultRecord {
        ResultRecord {
            puzzle_name: puzzle.to_owned(),
            algorithm,
            execution_time: 1.0,
            expanded_nodes: 100,
            generated_nodes: 400,
            duplicated_nodes: 40,
            memory_usage_bytes: 4096,
            num_pieces: 2,
            solution_steps: 5,
            empty_spaces: 3,
            solution_path: Some("R1D".to_owned()),
            solved_by_width: (algorithm == Algorithm::IterativeWidening).then_some(2),
            nodes_per_second: None,
        }
    }

    #[test]
    fn dataset_covers_each_algorithm() {
        let collection = RunCollection::from_records([
            record(Algorithm::NoDuplicateDetection, "a"),
            record(Algorithm::DuplicateDetection, "a"),
            record(Algorithm::IterativeWidening, "b"),
        ]);
        let dataset = build_dataset(&collection);

        assert_eq!(dataset.individual.len(), 3);
        assert_eq!(dataset.comparative.len(), 3);

        // Every record reports memory, so each individual series carries
        // node-equivalent memory points too.
        for series in &dataset.individual {
            assert_eq!(series.expanded.points.len(), 1);
            assert_eq!(series.memory_nodes.points.len(), 1);
        }
    }

    #[test]
    fn comparative_series_follow_the_join_universe() {
        let collection = RunCollection::from_records([
            record(Algorithm::NoDuplicateDetection, "only_algo1"),
            record(Algorithm::DuplicateDetection, "a"),
            record(Algorithm::IterativeWidening, "b"),
        ]);
        let dataset = build_dataset(&collection);

        let baseline = dataset
            .comparative
            .iter()
            .find(|s| s.algorithm == Algorithm::NoDuplicateDetection)
            .unwrap();
        // The puzzle only the baseline variant solved is outside the join
        // universe.
        assert!(baseline.series.points.is_empty());
    }

    #[test]
    fn ratio_sample_is_guarded_per_record() {
        let collection =
            RunCollection::from_records([record(Algorithm::DuplicateDetection, "a")]);
        let run_set = collection.get(Algorithm::DuplicateDetection).unwrap();

        // Primary estimate is min(3^2, 800) = 9, expanded = 100.
        assert_eq!(ratio_sample(run_set), [100.0 / 9.0]);
    }
}
