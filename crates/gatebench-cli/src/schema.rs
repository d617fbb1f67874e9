//! JSON dataset shapes consumed by the external chart renderer.
//!
//! The pipeline does not render charts; it emits these plot-ready datasets
//! instead. All series are restricted to strictly positive values because
//! the downstream renderer draws them on log-log axes; the number of
//! excluded points is carried alongside each series.

use chrono::{DateTime, Utc};
use gatebench_analysis::{
    compare::LogScaleSeries,
    model::TheoreticalModel,
    record::Algorithm,
};
use serde::Serialize;

/// A positive-filtered series for one algorithm, with its legend label.
#[derive(Debug, Serialize)]
pub(crate) struct AlgorithmLogSeries {
    pub algorithm: Algorithm,
    pub label: &'static str,
    pub series: LogScaleSeries,
}

/// Dataset of the space-complexity analysis.
#[derive(Debug, Serialize)]
pub(crate) struct SpaceDataset {
    /// When this dataset was generated.
    pub generated_at: DateTime<Utc>,
    /// Per-algorithm series against the algorithm's own estimates.
    pub individual: Vec<IndividualSpaceSeries>,
    /// Joined series against the common baseline estimate.
    pub comparative: Vec<AlgorithmLogSeries>,
}

/// Space series of one algorithm against its own theoretical estimates.
#[derive(Debug, Serialize)]
pub(crate) struct IndividualSpaceSeries {
    pub algorithm: Algorithm,
    pub label: &'static str,
    /// x = theoretical estimate, y = expanded nodes.
    pub expanded: LogScaleSeries,
    /// x = theoretical estimate, y = auxiliary memory in node equivalents.
    pub memory_nodes: LogScaleSeries,
}

/// Dataset of the time/performance analysis.
#[derive(Debug, Serialize)]
pub(crate) struct TimeDataset {
    /// When this dataset was generated.
    pub generated_at: DateTime<Utc>,
    /// One entry per auxiliary complexity model.
    pub models: Vec<ModelSeriesSet>,
}

/// Generated-node series of every algorithm against one complexity model.
#[derive(Debug, Serialize)]
pub(crate) struct ModelSeriesSet {
    pub model: TheoreticalModel,
    pub label: &'static str,
    pub series: Vec<AlgorithmLogSeries>,
}
