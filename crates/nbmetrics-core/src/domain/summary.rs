//! Aggregate summary and its tabular projection.

use super::record::{MetricRecord, RecordStage};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// Cross-validation metrics reported as mean ± std.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CvMetric {
    Accuracy,
    Precision,
    Recall,
    F1Score,
}

impl CvMetric {
    /// Map a printed label (`Accuracy`, `F1-Score`, ...) to its metric.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Accuracy" => Some(CvMetric::Accuracy),
            "Precision" => Some(CvMetric::Precision),
            "Recall" => Some(CvMetric::Recall),
            "F1-Score" => Some(CvMetric::F1Score),
            _ => None,
        }
    }

    /// Normalized key used in the summary document.
    pub fn key(&self) -> &'static str {
        match self {
            CvMetric::Accuracy => "accuracy",
            CvMetric::Precision => "precision",
            CvMetric::Recall => "recall",
            CvMetric::F1Score => "f1_score",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "accuracy" => Some(CvMetric::Accuracy),
            "precision" => Some(CvMetric::Precision),
            "recall" => Some(CvMetric::Recall),
            "f1_score" => Some(CvMetric::F1Score),
            _ => None,
        }
    }
}

const CV_KEYS: &[&str] = &["accuracy", "precision", "recall", "f1_score"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MeanStd {
    pub mean: f64,
    pub std: f64,
}

/// Metric → (mean, std), in order of first report.
///
/// A later report of the same metric replaces the value but keeps the
/// metric's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossValidationMetrics {
    entries: Vec<(CvMetric, MeanStd)>,
}

impl CrossValidationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: CvMetric, value: MeanStd) {
        match self.entries.iter_mut().find(|(m, _)| *m == metric) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((metric, value)),
        }
    }

    pub fn get(&self, metric: CvMetric) -> Option<&MeanStd> {
        self.entries
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CvMetric, &MeanStd)> {
        self.entries.iter().map(|(m, value)| (*m, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&CvMetric> for CrossValidationMetrics {
    type Output = MeanStd;

    fn index(&self, metric: &CvMetric) -> &MeanStd {
        match self.get(*metric) {
            Some(value) => value,
            None => panic!("no cross-validation entry for {}", metric.key()),
        }
    }
}

impl Serialize for CrossValidationMetrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (metric, value) in &self.entries {
            map.serialize_entry(metric.key(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CrossValidationMetrics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CvVisitor;

        impl<'de> Visitor<'de> for CvVisitor {
            type Value = CrossValidationMetrics;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of cross-validation metric to mean/std")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut metrics = CrossValidationMetrics::new();
                while let Some(key) = access.next_key::<String>()? {
                    let metric = CvMetric::from_key(&key)
                        .ok_or_else(|| <A::Error as serde::de::Error>::unknown_variant(&key, CV_KEYS))?;
                    metrics.insert(metric, access.next_value()?);
                }
                Ok(metrics)
            }
        }

        deserializer.deserialize_map(CvVisitor)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClassImbalance {
    pub severe_or_fatal_count: u64,
    pub severe_or_fatal_pct: f64,
}

/// Aggregate root written to the summary JSON document.
///
/// Field order is the serialized key order. Absent facts stay `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub source_notebook: String,
    pub baseline_model_metrics: Vec<MetricRecord>,
    pub final_selected_model: Option<MetricRecord>,
    pub cross_validation_summary: CrossValidationMetrics,
    pub class_imbalance: Option<ClassImbalance>,
}

/// One row of the model comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub stage: RecordStage,
    pub model: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub roc_auc: f64,
}

impl From<&MetricRecord> for ComparisonRow {
    fn from(record: &MetricRecord) -> Self {
        Self {
            stage: record.stage,
            model: record.model.clone(),
            accuracy: record.accuracy,
            precision: record.precision,
            recall: record.recall,
            f1_score: record.f1_score,
            roc_auc: record.roc_auc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cv_metric_from_label() {
        assert_eq!(CvMetric::from_label("Accuracy"), Some(CvMetric::Accuracy));
        assert_eq!(CvMetric::from_label("F1-Score"), Some(CvMetric::F1Score));
        assert_eq!(CvMetric::from_label("ROC-AUC"), None);
        assert_eq!(CvMetric::from_label("accuracy"), None);
    }

    #[test]
    fn test_cv_map_keeps_first_report_order() {
        let mut cv = CrossValidationMetrics::new();
        cv.insert(CvMetric::F1Score, MeanStd { mean: 0.7, std: 0.05 });
        cv.insert(CvMetric::Accuracy, MeanStd { mean: 0.82, std: 0.03 });
        cv.insert(CvMetric::F1Score, MeanStd { mean: 0.72, std: 0.04 });

        assert_eq!(cv.len(), 2);
        let text = serde_json::to_string(&cv).expect("serialize cv");
        assert_eq!(
            text,
            r#"{"f1_score":{"mean":0.72,"std":0.04},"accuracy":{"mean":0.82,"std":0.03}}"#
        );
    }

    #[test]
    fn test_cv_map_deserializes_in_document_order() {
        let raw = r#"{"recall":{"mean":0.6,"std":0.05},"accuracy":{"mean":0.84,"std":0.02}}"#;
        let cv: CrossValidationMetrics = serde_json::from_str(raw).expect("parse cv");
        let order: Vec<CvMetric> = cv.iter().map(|(m, _)| m).collect();
        assert_eq!(order, vec![CvMetric::Recall, CvMetric::Accuracy]);
        assert_eq!(cv.get(CvMetric::Accuracy), Some(&MeanStd { mean: 0.84, std: 0.02 }));
        assert_eq!(serde_json::to_string(&cv).expect("serialize cv"), raw);
    }

    #[test]
    fn test_cv_map_rejects_unknown_key() {
        let raw = r#"{"roc_auc":{"mean":0.9,"std":0.01}}"#;
        assert!(serde_json::from_str::<CrossValidationMetrics>(raw).is_err());
    }

    #[test]
    fn test_cv_key_round_trip() {
        for metric in [CvMetric::Accuracy, CvMetric::Precision, CvMetric::Recall, CvMetric::F1Score] {
            assert_eq!(CvMetric::from_key(metric.key()), Some(metric));
        }
        assert_eq!(CvMetric::from_key("F1-Score"), None);
    }

    #[test]
    fn test_empty_summary_keeps_nulls() {
        let summary = Summary {
            source_notebook: "nb.ipynb".to_string(),
            baseline_model_metrics: vec![],
            final_selected_model: None,
            cross_validation_summary: CrossValidationMetrics::new(),
            class_imbalance: None,
        };
        let value = serde_json::to_value(&summary).expect("serialize summary");
        assert_eq!(
            value,
            json!({
                "source_notebook": "nb.ipynb",
                "baseline_model_metrics": [],
                "final_selected_model": null,
                "cross_validation_summary": {},
                "class_imbalance": null,
            })
        );
    }
}
