//! Report discovery and loading
//!
//! The solver runners write one report per solved puzzle, named
//! `<prefix>_<puzzle>.txt` with the algorithm's file prefix. This module
//! scans a report directory, derives each record's identity from its file
//! name, and parses the texts into a [`RunCollection`].
//!
//! Per-file failures (unreadable or unparsable reports) are diagnosed to
//! stderr and skipped; only an entirely empty collection is fatal.

use std::{fs, path::Path};

use anyhow::Context;
use gatebench_analysis::{
    parser,
    record::Algorithm,
    run_set::RunCollection,
};

/// Derives the algorithm and puzzle name from a report file name.
///
/// `algo2_gate_07.txt` maps to `(DuplicateDetection, "gate_07")`. Files
/// without the `.txt` extension or a known algorithm prefix are not
/// reports and yield `None`.
pub(crate) fn classify_report_file(file_name: &str) -> Option<(Algorithm, String)> {
    let stem = file_name.strip_suffix(".txt")?;
    let (prefix, puzzle_name) = stem.split_once('_')?;
    let algorithm = Algorithm::from_file_prefix(prefix)?;
    if puzzle_name.is_empty() {
        return None;
    }
    Some((algorithm, puzzle_name.to_owned()))
}

/// Scans `dir` for report files and parses them into a collection.
///
/// Directory iteration order does not matter for the result (grouping is
/// order-independent), but entries are still sorted so diagnostics come out
/// in a stable order.
pub(crate) fn load_run_collection(dir: &Path) -> anyhow::Result<RunCollection> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read report directory: {}", dir.display()))?;
    let mut paths: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    let mut records = Vec::new();
    let mut skipped = 0_usize;
    for path in paths {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some((algorithm, puzzle_name)) = classify_report_file(file_name) else {
            continue;
        };
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Skipping {}: {err}", path.display());
                skipped += 1;
                continue;
            }
        };
        match parser::parse_report(algorithm, &puzzle_name, &text) {
            Ok(record) => records.push(record),
            Err(err) => {
                eprintln!("Skipping {}: {err}", path.display());
                skipped += 1;
            }
        }
    }

    let collection = RunCollection::from_records(records);
    if collection.is_empty() {
        anyhow::bail!("no solver reports found in {}", dir.display());
    }

    eprintln!(
        "Loaded {} puzzle results from {}",
        collection.total_records(),
        dir.display()
    );
    if skipped > 0 {
        eprintln!("Skipped {skipped} report(s) with missing or malformed fields");
    }
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_report_file_names() {
        assert_eq!(
            classify_report_file("algo1_gate07.txt"),
            Some((Algorithm::NoDuplicateDetection, "gate07".to_owned()))
        );
        assert_eq!(
            classify_report_file("algo3_two_towers.txt"),
            Some((Algorithm::IterativeWidening, "two_towers".to_owned()))
        );
    }

    #[test]
    fn rejects_non_report_file_names() {
        assert_eq!(classify_report_file("algo1_gate07.log"), None);
        assert_eq!(classify_report_file("algo4_gate07.txt"), None);
        assert_eq!(classify_report_file("summary.txt"), None);
        assert_eq!(classify_report_file("algo1_.txt"), None);
        assert_eq!(classify_report_file("README.md"), None);
    }
}
