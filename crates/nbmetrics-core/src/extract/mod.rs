//! Pattern extraction over collected console text.
//!
//! Four independent matchers run over the same immutable [`TextStream`],
//! each with its own precedence rule:
//!
//! | Fact                 | Occurrences | Precedence                       |
//! |----------------------|-------------|----------------------------------|
//! | Baseline metrics     | many        | kept in order of appearance      |
//! | Selected model block | at most one | first complete block wins        |
//! | Cross-validation     | many        | last report per metric wins      |
//! | Class imbalance      | at most one | first line wins                  |
//!
//! A fact that is absent leaves its result empty. A capture that does not
//! decode as a number is a fatal [`SummaryError::NumericDecode`].

pub mod decode;
pub mod patterns;

use crate::domain::{
    BaselineModel, ClassImbalance, CrossValidationMetrics, CvMetric, MeanStd, MetricRecord,
    MetricValues, Result,
};
use crate::notebook::TextStream;
use regex::Captures;
use tracing::debug;

pub use decode::{decode_count, decode_decimal};
pub use patterns::{Matchers, SELECTED_BLOCK_HEADER};

/// Everything recovered from one text stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub baselines: Vec<MetricRecord>,
    pub selected: Option<MetricRecord>,
    pub cross_validation: CrossValidationMetrics,
    pub class_imbalance: Option<ClassImbalance>,
}

/// Stateless extractor holding the compiled matchers.
#[derive(Debug, Clone)]
pub struct ExtractionEngine {
    matchers: Matchers,
}

impl ExtractionEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            matchers: Matchers::compile()?,
        })
    }

    /// Run all four matchers.
    pub fn extract(&self, stream: &TextStream) -> Result<Extraction> {
        let extraction = Extraction {
            baselines: self.baseline_records(stream)?,
            selected: self.selected_record(stream)?,
            cross_validation: self.cross_validation(stream)?,
            class_imbalance: self.class_imbalance(stream)?,
        };
        debug!(
            baselines = extraction.baselines.len(),
            selected = extraction.selected.is_some(),
            cv_metrics = extraction.cross_validation.len(),
            class_imbalance = extraction.class_imbalance.is_some(),
            "extraction complete"
        );
        Ok(extraction)
    }

    /// Every baseline metric line, in order of appearance.
    pub fn baseline_records(&self, stream: &TextStream) -> Result<Vec<MetricRecord>> {
        let mut records = Vec::new();
        for caps in self.matchers.baseline_line.captures_iter(stream.as_str()) {
            let Some(model) = BaselineModel::from_display_name(group(&caps, "model")) else {
                continue;
            };
            records.push(MetricRecord::baseline(model, metric_values(&caps)?));
        }
        Ok(records)
    }

    /// The first complete selected-model block, if any.
    pub fn selected_record(&self, stream: &TextStream) -> Result<Option<MetricRecord>> {
        self.matchers
            .selected_block
            .captures(stream.as_str())
            .map(|caps| metric_values(&caps).map(MetricRecord::final_selected))
            .transpose()
    }

    /// Cross-validation mean/std per metric; later lines overwrite earlier ones.
    pub fn cross_validation(&self, stream: &TextStream) -> Result<CrossValidationMetrics> {
        let mut metrics = CrossValidationMetrics::new();
        for caps in self.matchers.cv_metric_line.captures_iter(stream.as_str()) {
            // Labels outside the known set are ignored.
            let Some(metric) = CvMetric::from_label(group(&caps, "label")) else {
                continue;
            };
            let value = MeanStd {
                mean: decode_decimal("cv_mean", group(&caps, "mean"))?,
                std: decode_decimal("cv_std", group(&caps, "std"))?,
            };
            metrics.insert(metric, value);
        }
        Ok(metrics)
    }

    /// Severe/fatal count and share from the first matching line.
    pub fn class_imbalance(&self, stream: &TextStream) -> Result<Option<ClassImbalance>> {
        let Some(caps) = self.matchers.class_imbalance_line.captures(stream.as_str()) else {
            return Ok(None);
        };
        Ok(Some(ClassImbalance {
            severe_or_fatal_count: decode_count("severe_or_fatal_count", group(&caps, "count"))?,
            severe_or_fatal_pct: decode_decimal("severe_or_fatal_pct", group(&caps, "pct"))?,
        }))
    }
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map(|m| m.as_str()).unwrap_or_default()
}

fn metric_values(caps: &Captures<'_>) -> Result<MetricValues> {
    Ok(MetricValues {
        accuracy: decode_decimal("accuracy", group(caps, "accuracy"))?,
        precision: decode_decimal("precision", group(caps, "precision"))?,
        recall: decode_decimal("recall", group(caps, "recall"))?,
        f1_score: decode_decimal("f1_score", group(caps, "f1_score"))?,
        roc_auc: decode_decimal("roc_auc", group(caps, "roc_auc"))?,
    })
}
