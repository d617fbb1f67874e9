//! Result analysis for sliding-puzzle solver benchmark reports
//!
//! This crate turns the plain-text reports emitted by the three solver
//! variants into structured records, descriptive statistics, theoretical
//! complexity estimates, and cross-algorithm comparisons.
//!
//! # Overview
//!
//! The analysis pipeline has four stages:
//!
//! 1. **Parse** ([`parser::parse_report`]): Convert one report's text into a
//!    typed [`record::ResultRecord`], or reject it with a
//!    [`parser::ParseError`] naming the offending field
//! 2. **Annotate** ([`model::TheoreticalEstimates`]): Compute the
//!    per-algorithm and cross-cutting theoretical complexity estimates from
//!    the record's own fields
//! 3. **Group** ([`run_set::RunCollection`]): Collect valid records into
//!    per-algorithm run sets and extract per-metric numeric samples
//! 4. **Compare** ([`compare`]): Join records across algorithms by puzzle
//!    name and build the summary tables and plot-ready series
//!
//! ```text
//! report texts
//!     ↓
//! parse_report            → ResultRecord (all-or-nothing per report)
//!     ↓
//! RunCollection::from_records
//!     ├─ per-algorithm metric samples → StatSummary
//!     ├─ TheoreticalEstimates per record
//!     └─ comparative series (joined by puzzle name)
//! ```
//!
//! Every stage is a pure function of its inputs; file discovery and output
//! formatting live in the caller.
//!
//! # Examples
//!
//! ```
//! use gatebench_analysis::{
//!     parser,
//!     record::Algorithm,
//!     run_set::{Metric, RunCollection},
//! };
//!
//! let text = "\
//! Solution path: R1D L2R
//! Execution time: 0.25
//! Expanded nodes: 120
//! Generated nodes: 480
//! Duplicated nodes: 60
//! Auxiliary memory usage (bytes): 4096
//! Number of pieces in the puzzle: 3
//! Number of steps in solution: 7
//! Number of empty spaces: 4
//! ";
//!
//! let record = parser::parse_report(Algorithm::DuplicateDetection, "gate01", text).unwrap();
//! let collection = RunCollection::from_records([record]);
//!
//! let run_set = collection.get(Algorithm::DuplicateDetection).unwrap();
//! let expanded = run_set.summarize(Metric::ExpandedNodes).unwrap();
//! assert_eq!(expanded.total, 120.0);
//! ```

pub mod compare;
pub mod model;
pub mod parser;
pub mod record;
pub mod run_set;
