//! Report parsing
//!
//! Converts the text of one solver report into a [`ResultRecord`], or
//! rejects the whole report with a [`ParseError`] naming the offending
//! field.
//!
//! # Grammar
//!
//! A report is a sequence of labeled lines in no fixed order. Each
//! recognized field has a label prefix and a typed decoder; lines that match
//! no label are ignored. When a label occurs more than once, the first
//! occurrence wins.
//!
//! Decoding is strict: integer fields reject decimal points and signs, float
//! fields accept non-negative decimal notation only. A required field that
//! is missing or fails to decode rejects the record as a whole; an optional
//! field that is missing yields an explicit absent value and parsing
//! continues.

use crate::record::{Algorithm, ResultRecord};

const SOLUTION_PATH_LABEL: &str = "Solution path:";
const EXECUTION_TIME_LABEL: &str = "Execution time:";
const EXPANDED_NODES_LABEL: &str = "Expanded nodes:";
const GENERATED_NODES_LABEL: &str = "Generated nodes:";
const DUPLICATED_NODES_LABEL: &str = "Duplicated nodes:";
const MEMORY_USAGE_LABEL: &str = "Auxiliary memory usage (bytes):";
const NUM_PIECES_LABEL: &str = "Number of pieces in the puzzle:";
const SOLUTION_STEPS_LABEL: &str = "Number of steps in solution:";
const EMPTY_SPACES_LABEL: &str = "Number of empty spaces:";
const SOLVED_BY_WIDTH_PREFIX: &str = "Solved by IW(";
const NODES_PER_SECOND_LABEL: &str = "Number of nodes expanded per second:";

/// Report field identifiers, used in parse diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Field {
    #[display("solution_path")]
    SolutionPath,
    #[display("execution_time")]
    ExecutionTime,
    #[display("expanded_nodes")]
    ExpandedNodes,
    #[display("generated_nodes")]
    GeneratedNodes,
    #[display("duplicated_nodes")]
    DuplicatedNodes,
    #[display("memory_usage_bytes")]
    MemoryUsageBytes,
    #[display("num_pieces")]
    NumPieces,
    #[display("solution_steps")]
    SolutionSteps,
    #[display("empty_spaces")]
    EmptySpaces,
    #[display("solved_by_width")]
    SolvedByWidth,
    #[display("nodes_per_second")]
    NodesPerSecond,
}

/// Reason a report was rejected.
///
/// Rejection is all-or-nothing: no partial record is ever produced.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// A required field had no matching line in the report.
    #[display("required field '{field}' not found in report")]
    MissingField {
        /// The field that could not be located.
        field: Field,
    },
    /// A located field's value failed to decode as its declared type.
    #[display("field '{field}' has malformed value '{value}'")]
    InvalidValue {
        /// The field whose value failed to decode.
        field: Field,
        /// The offending value text.
        value: String,
    },
}

impl ParseError {
    /// The field this failure is about.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            ParseError::MissingField { field } | ParseError::InvalidValue { field, .. } => *field,
        }
    }
}

/// Parses the full text of one report into a record.
///
/// Pure function of its inputs: the algorithm and puzzle name are implied by
/// the report's source (for file-based reports, the file name) and are
/// supplied by the caller.
///
/// # Examples
///
/// ```
/// use gatebench_analysis::{parser, record::Algorithm};
///
/// let text = "\
/// Execution time: 0.5
/// Expanded nodes: 10
/// Generated nodes: 40
/// Duplicated nodes: 0
/// Auxiliary memory usage (bytes): 0
/// Number of pieces in the puzzle: 2
/// Number of steps in solution: 4
/// Number of empty spaces: 3
/// ";
/// let record = parser::parse_report(Algorithm::NoDuplicateDetection, "gate01", text).unwrap();
/// assert_eq!(record.expanded_nodes, 10);
/// assert_eq!(record.solution_path, None);
/// ```
pub fn parse_report(
    algorithm: Algorithm,
    puzzle_name: &str,
    text: &str,
) -> Result<ResultRecord, ParseError> {
    let mut fields = RawFields::default();
    for line in text.lines() {
        fields.scan_line(line.trim())?;
    }
    fields.into_record(algorithm, puzzle_name)
}

/// Accumulator for field values located while scanning a report.
#[derive(Debug, Default)]
struct RawFields {
    solution_path: Option<String>,
    execution_time: Option<f64>,
    expanded_nodes: Option<u64>,
    generated_nodes: Option<u64>,
    duplicated_nodes: Option<u64>,
    memory_usage_bytes: Option<u64>,
    num_pieces: Option<u64>,
    solution_steps: Option<u64>,
    empty_spaces: Option<u64>,
    solved_by_width: Option<u64>,
    nodes_per_second: Option<f64>,
}

impl RawFields {
    fn scan_line(&mut self, line: &str) -> Result<(), ParseError> {
        if let Some(rest) = line.strip_prefix(SOLUTION_PATH_LABEL) {
            put_text(&mut self.solution_path, rest);
        } else if let Some(rest) = line.strip_prefix(EXECUTION_TIME_LABEL) {
            put_f64(&mut self.execution_time, Field::ExecutionTime, rest)?;
        } else if let Some(rest) = line.strip_prefix(EXPANDED_NODES_LABEL) {
            put_u64(&mut self.expanded_nodes, Field::ExpandedNodes, rest)?;
        } else if let Some(rest) = line.strip_prefix(GENERATED_NODES_LABEL) {
            put_u64(&mut self.generated_nodes, Field::GeneratedNodes, rest)?;
        } else if let Some(rest) = line.strip_prefix(DUPLICATED_NODES_LABEL) {
            put_u64(&mut self.duplicated_nodes, Field::DuplicatedNodes, rest)?;
        } else if let Some(rest) = line.strip_prefix(MEMORY_USAGE_LABEL) {
            put_u64(&mut self.memory_usage_bytes, Field::MemoryUsageBytes, rest)?;
        } else if let Some(rest) = line.strip_prefix(NUM_PIECES_LABEL) {
            put_u64(&mut self.num_pieces, Field::NumPieces, rest)?;
        } else if let Some(rest) = line.strip_prefix(SOLUTION_STEPS_LABEL) {
            put_u64(&mut self.solution_steps, Field::SolutionSteps, rest)?;
        } else if let Some(rest) = line.strip_prefix(EMPTY_SPACES_LABEL) {
            put_u64(&mut self.empty_spaces, Field::EmptySpaces, rest)?;
        } else if let Some(rest) = line.strip_prefix(SOLVED_BY_WIDTH_PREFIX) {
            let inner = rest
                .split_once(')')
                .map(|(inner, _)| inner)
                .ok_or_else(|| ParseError::InvalidValue {
                    field: Field::SolvedByWidth,
                    value: rest.trim().to_owned(),
                })?;
            put_u64(&mut self.solved_by_width, Field::SolvedByWidth, inner)?;
        } else if let Some(rest) = line.strip_prefix(NODES_PER_SECOND_LABEL) {
            put_f64(&mut self.nodes_per_second, Field::NodesPerSecond, rest)?;
        }
        Ok(())
    }

    fn into_record(
        self,
        algorithm: Algorithm,
        puzzle_name: &str,
    ) -> Result<ResultRecord, ParseError> {
        Ok(ResultRecord {
            puzzle_name: puzzle_name.to_owned(),
            algorithm,
            execution_time: require(self.execution_time, Field::ExecutionTime)?,
            expanded_nodes: require(self.expanded_nodes, Field::ExpandedNodes)?,
            generated_nodes: require(self.generated_nodes, Field::GeneratedNodes)?,
            duplicated_nodes: require(self.duplicated_nodes, Field::DuplicatedNodes)?,
            memory_usage_bytes: require(self.memory_usage_bytes, Field::MemoryUsageBytes)?,
            num_pieces: require(self.num_pieces, Field::NumPieces)?,
            solution_steps: require(self.solution_steps, Field::SolutionSteps)?,
            empty_spaces: require(self.empty_spaces, Field::EmptySpaces)?,
            solution_path: self.solution_path,
            solved_by_width: self.solved_by_width,
            nodes_per_second: self.nodes_per_second,
        })
    }
}

fn require<T>(value: Option<T>, field: Field) -> Result<T, ParseError> {
    value.ok_or(ParseError::MissingField { field })
}

fn put_text(slot: &mut Option<String>, rest: &str) {
    if slot.is_none() {
        *slot = Some(rest.trim().to_owned());
    }
}

fn put_u64(slot: &mut Option<u64>, field: Field, rest: &str) -> Result<(), ParseError> {
    if slot.is_none() {
        *slot = Some(decode_u64(field, rest)?);
    }
    Ok(())
}

fn put_f64(slot: &mut Option<f64>, field: Field, rest: &str) -> Result<(), ParseError> {
    if slot.is_none() {
        *slot = Some(decode_f64(field, rest)?);
    }
    Ok(())
}

fn decode_u64(field: Field, raw: &str) -> Result<u64, ParseError> {
    let raw = raw.trim();
    let invalid = || ParseError::InvalidValue {
        field,
        value: raw.to_owned(),
    };
    // Digits only; rejects decimal points, signs, and embedded text.
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}

fn decode_f64(field: Field, raw: &str) -> Result<f64, ParseError> {
    let raw = raw.trim();
    let invalid = || ParseError::InvalidValue {
        field,
        value: raw.to_owned(),
    };
    // Digits and at most one decimal point; rejects signs, exponents, and
    // non-finite spellings up front.
    if raw.is_empty()
        || !raw.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        || raw.bytes().filter(|&b| b == b'.').count() > 1
    {
        return Err(invalid());
    }
    raw.parse::<f64>().map_err(|_| invalid())
}
