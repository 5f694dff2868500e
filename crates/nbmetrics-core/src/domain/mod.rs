//! Domain models for notebook metric summaries.
//!
//! - `MetricRecord`: one model's headline metrics at a stage
//! - `Summary`: aggregate written to the JSON document
//! - `ComparisonRow`: flattened row of the CSV comparison table

pub mod error;
pub mod record;
pub mod summary;

pub use error::{Phase, Result, SummaryError};
pub use record::{BaselineModel, MetricRecord, MetricValues, RecordStage, SELECTED_MODEL_LABEL};
pub use summary::{
    ClassImbalance, ComparisonRow, CrossValidationMetrics, CvMetric, MeanStd, Summary,
};
