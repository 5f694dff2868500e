//! Notebook Metrics Core
//!
//! Turns the printed console output of an executed evaluation notebook into
//! a structured metrics summary:
//! - Collects stream and result text from code cells in document order
//! - Extracts baseline, selected-model, cross-validation and class-imbalance facts
//! - Writes a JSON summary and a CSV model comparison table

pub mod assemble;
pub mod config;
pub mod domain;
pub mod extract;
pub mod notebook;
pub mod obs;
pub mod pipeline;
pub mod reporting;
pub mod telemetry;

pub use assemble::{assemble_summary, comparison_rows};
pub use config::PipelineConfig;
pub use domain::{
    BaselineModel, ClassImbalance, ComparisonRow, CrossValidationMetrics, CvMetric, MeanStd,
    MetricRecord, MetricValues, Phase, RecordStage, Result, Summary, SummaryError,
    SELECTED_MODEL_LABEL,
};
pub use extract::{Extraction, ExtractionEngine};
pub use notebook::{collect_output_text, parse_notebook, read_notebook, Notebook, TextStream};
pub use pipeline::{run, PipelineOutcome, SummaryPipeline};
pub use reporting::{
    render_comparison_csv, write_comparison_csv, write_summary_json, COMPARISON_COLUMNS,
};
pub use telemetry::{init_tracing, LogFormat};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
