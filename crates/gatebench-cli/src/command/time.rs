//! Performance analysis command
//!
//! Summarizes node generation and execution time per algorithm, reports
//! duplicate-pruning efficiency for the variants that track duplicates, and
//! optionally emits generated-node series against the auxiliary complexity
//! models for the external chart renderer.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use gatebench_analysis::{
    compare,
    model::TheoreticalModel,
    run_set::{AlgorithmRunSet, Metric, RunCollection},
};
use gatebench_stats::descriptive::StatSummary;

use crate::{
    format::{banner, thousands},
    reports,
    schema::{AlgorithmLogSeries, ModelSeriesSet, TimeDataset},
    util,
};

/// The auxiliary models charted against generated nodes.
const TIME_MODELS: [TheoreticalModel; 3] = [
    TheoreticalModel::IwComplexity,
    TheoreticalModel::Combined,
    TheoreticalModel::ExponentialWidth,
];

#[derive(Debug, Clone, Args)]
pub(crate) struct TimeArg {
    /// Directory containing the solver report files
    #[arg(default_value = "output")]
    pub reports_dir: PathBuf,

    /// Write the plot-ready dataset as JSON to this path
    #[arg(long)]
    pub dataset: Option<PathBuf>,
}

pub(crate) fn run(arg: &TimeArg) -> anyhow::Result<()> {
    eprintln!("Analyzing algorithm performance...");
    let collection = reports::load_run_collection(&arg.reports_dir)?;

    print_statistics(&collection);

    if let Some(path) = &arg.dataset {
        let dataset = build_dataset(&collection);
        util::Output::open(path.clone())?.write_json(&dataset)?;
        eprintln!("Performance dataset written to {}", path.display());
    }
    Ok(())
}

fn print_statistics(collection: &RunCollection) {
    println!();
    println!("{}", banner());
    println!("PERFORMANCE ANALYSIS SUMMARY");
    println!("{}", banner());

    for run_set in collection.run_sets() {
        println!();
        println!("{}:", run_set.algorithm().label());
        println!("  Total puzzles: {}", run_set.len());

        print_count_line(run_set, "Generated nodes:", Metric::GeneratedNodes);
        print_count_line(run_set, "Expanded nodes: ", Metric::ExpandedNodes);
        print_count_line(run_set, "Duplicated nodes:", Metric::DuplicatedNodes);

        if let Some(time) = run_set.summarize(Metric::ExecutionTime) {
            println!(
                "  Execution time (s): min={:.6}, max={:.2}, avg={:.3}",
                time.min, time.max, time.mean
            );
        }

        if run_set.algorithm().tracks_duplicates()
            && let Some(efficiency) = StatSummary::new(efficiency_sample(run_set))
        {
            println!(
                "  Efficiency %: min={:.1}%, max={:.1}%, avg={:.1}%",
                efficiency.min, efficiency.max, efficiency.mean
            );
        }
    }
}

fn print_count_line(run_set: &AlgorithmRunSet, label: &str, metric: Metric) {
    if let Some(summary) = run_set.summarize(metric) {
        println!(
            "  {label} min={}, max={}, avg={}",
            thousands(summary.min, 0),
            thousands(summary.max, 0),
            thousands(summary.mean, 0)
        );
    }
}

/// Duplicate-pruning efficiency per record, in percent.
fn efficiency_sample(run_set: &AlgorithmRunSet) -> Vec<f64> {
    run_set
        .records()
        .iter()
        .map(|e| compare::efficiency(&e.record))
        .collect()
}

fn build_dataset(collection: &RunCollection) -> TimeDataset {
    let models = TIME_MODELS
        .into_iter()
        .map(|model| ModelSeriesSet {
            model,
            label: model.label(),
            series: compare::model_series(collection, model)
                .into_iter()
                .map(|series| AlgorithmLogSeries {
                    algorithm: series.algorithm,
                    label: series.algorithm.label(),
                    series: compare::filter_positive(series.points),
                })
                .collect(),
        })
        .collect();

    TimeDataset {
        generated_at: Utc::now(),
        models,
    }
}

#[cfg(test)]
mod tests {
    use gatebench_analysis::record::{Algorithm, ResultRecord};

    use super::*;

    fn record(algorithm: Algorithm, puzzle: &str, width: Option<u64>) -> ResultRecord {
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
            solution_path: None,
            solved_by_width: width,
            nodes_per_second: None,
        }
    }

    #[test]
    fn dataset_has_one_entry_per_auxiliary_model() {
        let collection = RunCollection::from_records([
            record(Algorithm::DuplicateDetection, "a", None),
            record(Algorithm::IterativeWidening, "a", Some(2)),
        ]);
        let dataset = build_dataset(&collection);

        assert_eq!(dataset.models.len(), TIME_MODELS.len());
        for set in &dataset.models {
            // Only the width-bearing record defines the auxiliary models.
            assert_eq!(set.series.len(), 1);
            assert_eq!(set.series[0].algorithm, Algorithm::IterativeWidening);
        }
    }

    #[test]
    fn efficiency_sample_covers_every_record() {
        let collection = RunCollection::from_records([
            record(Algorithm::DuplicateDetection, "a", None),
            record(Algorithm::DuplicateDetection, "b", None),
        ]);
        let run_set = collection.get(Algorithm::DuplicateDetection).unwrap();
        assert_eq!(efficiency_sample(run_set), [80.0, 80.0]);
    }
}
