//! Statistical summary command
//!
//! Renders the per-algorithm statistics blocks, the solved-by-width
//! distribution, and the cross-algorithm comparison as a plain-text report.

use std::{
    fmt::{self, Write as _},
    path::PathBuf,
};

use clap::Args;
use gatebench_analysis::{
    compare::{self, COMPARISON_METRICS},
    run_set::{AlgorithmRunSet, Metric, RunCollection},
};
use gatebench_stats::descriptive::StatSummary;

use crate::{format, reports, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    /// Directory containing the solver report files
    #[arg(default_value = "output")]
    pub reports_dir: PathBuf,

    /// Write the summary to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let collection = reports::load_run_collection(&arg.reports_dir)?;

    let mut text = String::new();
    render_summary(&mut text, &collection)?;

    let mut output = util::Output::from_output_path(arg.output.clone())?;
    output.write_text(&text)?;
    Ok(())
}

fn render_summary(out: &mut String, collection: &RunCollection) -> fmt::Result {
    writeln!(out, "{}", format::banner())?;
    writeln!(out, "STATISTICAL SUMMARY OF PUZZLE SOLVER RESULTS")?;
    writeln!(out, "{}", format::banner())?;

    for run_set in collection.run_sets() {
        writeln!(out)?;
        writeln!(out, "{}", format::banner())?;
        writeln!(out, "{}", run_set.algorithm().label())?;
        writeln!(out, "{}", format::banner())?;
        writeln!(out, "Total test cases: {}", run_set.len())?;
        writeln!(out)?;

        for metric in Metric::ALL {
            write_metric_block(out, run_set, metric)?;
        }

        write_width_block(out, run_set)?;
    }

    write_comparison_block(out, collection)
}

/// Per-metric value formatting for the six-line statistics blocks.
enum Style {
    /// Six decimals, no separators (execution time).
    Seconds,
    /// Thousands-separated counts; the memory block also reports its total
    /// in KB.
    Count { kb_total: bool },
    /// Small plain integers (puzzle properties); a total would be
    /// meaningless, so the block has none.
    PlainInt,
    /// Thousands-separated rate; totals across runs are meaningless.
    Rate,
}

fn style(metric: Metric) -> Style {
    match metric {
        Metric::ExecutionTime => Style::Seconds,
        Metric::ExpandedNodes | Metric::GeneratedNodes | Metric::DuplicatedNodes => {
            Style::Count { kb_total: false }
        }
        Metric::MemoryUsage => Style::Count { kb_total: true },
        Metric::NumPieces | Metric::SolutionSteps | Metric::EmptySpaces => Style::PlainInt,
        Metric::NodesPerSecond => Style::Rate,
    }
}

fn write_metric_block(
    out: &mut String,
    run_set: &AlgorithmRunSet,
    metric: Metric,
) -> fmt::Result {
    writeln!(out, "{}:", metric.label())?;
    let Some(summary) = run_set.summarize(metric) else {
        writeln!(out, "  No data available")?;
        writeln!(out)?;
        return Ok(());
    };

    let StatSummary {
        min,
        max,
        mean,
        median,
        std_dev,
        total,
    } = summary;

    match style(metric) {
        Style::Seconds => {
            writeln!(out, "  Min:    {min:.6}")?;
            writeln!(out, "  Max:    {max:.6}")?;
            writeln!(out, "  Mean:   {mean:.6}")?;
            writeln!(out, "  Median: {median:.6}")?;
            writeln!(out, "  StdDev: {std_dev:.6}")?;
            writeln!(out, "  Total:  {total:.6}")?;
        }
        Style::Count { kb_total } => {
            writeln!(out, "  Min:    {}", format::thousands(min, 0))?;
            writeln!(out, "  Max:    {}", format::thousands(max, 0))?;
            writeln!(out, "  Mean:   {}", format::thousands(mean, 2))?;
            writeln!(out, "  Median: {}", format::thousands(median, 0))?;
            writeln!(out, "  StdDev: {}", format::thousands(std_dev, 2))?;
            if kb_total {
                writeln!(
                    out,
                    "  Total:  {} ({:.2} KB)",
                    format::thousands(total, 0),
                    total / 1024.0
                )?;
            } else {
                writeln!(out, "  Total:  {}", format::thousands(total, 0))?;
            }
        }
        Style::PlainInt => {
            writeln!(out, "  Min:    {min:.0}")?;
            writeln!(out, "  Max:    {max:.0}")?;
            writeln!(out, "  Mean:   {mean:.2}")?;
            writeln!(out, "  Median: {median:.0}")?;
            writeln!(out, "  StdDev: {std_dev:.2}")?;
        }
        Style::Rate => {
            writeln!(out, "  Min:    {}", format::thousands(min, 2))?;
            writeln!(out, "  Max:    {}", format::thousands(max, 2))?;
            writeln!(out, "  Mean:   {}", format::thousands(mean, 2))?;
            writeln!(out, "  Median: {}", format::thousands(median, 2))?;
            writeln!(out, "  StdDev: {}", format::thousands(std_dev, 2))?;
        }
    }
    writeln!(out)
}

fn write_width_block(out: &mut String, run_set: &AlgorithmRunSet) -> fmt::Result {
    writeln!(out, "SOLVED BY IW WIDTH:")?;
    for entry in run_set.width_distribution() {
        writeln!(
            out,
            "  IW({}): {} puzzles ({:.1}%)",
            entry.width, entry.count, entry.percentage
        )?;
    }
    writeln!(out)
}

fn write_comparison_block(out: &mut String, collection: &RunCollection) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", format::banner())?;
    writeln!(out, "CROSS-ALGORITHM COMPARISON")?;
    writeln!(out, "{}", format::banner())?;
    writeln!(out)?;

    for metric in COMPARISON_METRICS {
        writeln!(out, "{}:", comparison_heading(metric))?;
        for (algorithm, mean) in compare::mean_by_algorithm(collection, metric) {
            match metric {
                Metric::ExecutionTime => writeln!(
                    out,
                    "  {}: {mean:.6} seconds (mean)",
                    algorithm.short_label()
                )?,
                Metric::MemoryUsage => writeln!(
                    out,
                    "  {}: {} bytes (mean)",
                    algorithm.short_label(),
                    format::thousands(mean, 2)
                )?,
                _ => writeln!(
                    out,
                    "  {}: {} (mean)",
                    algorithm.short_label(),
                    format::thousands(mean, 2)
                )?,
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", format::banner())
}

fn comparison_heading(metric: Metric) -> &'static str {
    match metric {
        Metric::ExecutionTime => "EXECUTION TIME",
        Metric::MemoryUsage => "MEMORY USAGE",
        _ => metric.label(),
    }
}
