//! Statistical analysis utilities for the gatebench project.
//!
//! This crate provides the descriptive-statistics layer used by the benchmark
//! analysis pipeline:
//!
//! - **Summary statistics**: min, max, mean, median, sample standard
//!   deviation, and total over a numeric sample
//! - **Explicit empty-sample handling**: constructors return `Option` so
//!   callers must branch on "no data" instead of receiving zero-filled
//!   summaries
//!
//! # Modules
//!
//! - [`descriptive`]: Summary statistics for samples of `f64` values
//!
//! # Examples
//!
//! ```
//! use gatebench_stats::descriptive::StatSummary;
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! let summary = StatSummary::new(values).unwrap();
//! assert_eq!(summary.mean, 2.5);
//! assert_eq!(summary.median, 2.5);
//! assert_eq!(summary.total, 10.0);
//! ```

pub mod descriptive;
