//! Per-model metric records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for the tuned model reported after hyperparameter search.
pub const SELECTED_MODEL_LABEL: &str = "Logistic Regression (Tuned GridSearchCV)";

/// Closed set of baseline classifiers reported in the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaselineModel {
    LogisticRegression,
    DecisionTree,
    RandomForest,
    XgBoost,
}

impl BaselineModel {
    pub const ALL: [BaselineModel; 4] = [
        BaselineModel::LogisticRegression,
        BaselineModel::DecisionTree,
        BaselineModel::RandomForest,
        BaselineModel::XgBoost,
    ];

    /// Name as printed by the notebook.
    pub fn display_name(&self) -> &'static str {
        match self {
            BaselineModel::LogisticRegression => "Logistic Regression",
            BaselineModel::DecisionTree => "Decision Tree",
            BaselineModel::RandomForest => "Random Forest",
            BaselineModel::XgBoost => "XGBoost",
        }
    }

    /// Look up a model by its printed name. Exact match only.
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.display_name() == name)
    }
}

impl fmt::Display for BaselineModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Evaluation stage a record was reported at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordStage {
    Baseline,
    FinalSelected,
}

impl RecordStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStage::Baseline => "baseline",
            RecordStage::FinalSelected => "final_selected",
        }
    }
}

/// The five headline classification metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricValues {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub roc_auc: f64,
}

/// A model's metrics at a given stage.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricRecord {
    pub model: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub roc_auc: f64,
    pub stage: RecordStage,
}

impl MetricRecord {
    /// Record for an untuned baseline model.
    pub fn baseline(model: BaselineModel, values: MetricValues) -> Self {
        Self::new(model.display_name(), RecordStage::Baseline, values)
    }

    /// Record for the tuned model chosen as final.
    pub fn final_selected(values: MetricValues) -> Self {
        Self::new(SELECTED_MODEL_LABEL, RecordStage::FinalSelected, values)
    }

    fn new(model: &str, stage: RecordStage, values: MetricValues) -> Self {
        Self {
            model: model.to_string(),
            accuracy: values.accuracy,
            precision: values.precision,
            recall: values.recall,
            f1_score: values.f1_score,
            roc_auc: values.roc_auc,
            stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_values() -> MetricValues {
        MetricValues {
            accuracy: 0.91,
            precision: 0.88,
            recall: 0.85,
            f1_score: 0.86,
            roc_auc: 0.93,
        }
    }

    #[test]
    fn test_baseline_model_names() {
        assert_eq!(BaselineModel::LogisticRegression.display_name(), "Logistic Regression");
        assert_eq!(BaselineModel::DecisionTree.display_name(), "Decision Tree");
        assert_eq!(BaselineModel::RandomForest.display_name(), "Random Forest");
        assert_eq!(BaselineModel::XgBoost.display_name(), "XGBoost");
    }

    #[test]
    fn test_from_display_name_is_closed() {
        assert_eq!(
            BaselineModel::from_display_name("Random Forest"),
            Some(BaselineModel::RandomForest)
        );
        assert_eq!(BaselineModel::from_display_name("random forest"), None);
        assert_eq!(BaselineModel::from_display_name("Gradient Boosting"), None);
    }

    #[test]
    fn test_baseline_record_serializes_with_stage() {
        let record = MetricRecord::baseline(BaselineModel::RandomForest, sample_values());
        let value = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(
            value,
            json!({
                "model": "Random Forest",
                "accuracy": 0.91,
                "precision": 0.88,
                "recall": 0.85,
                "f1_score": 0.86,
                "roc_auc": 0.93,
                "stage": "baseline",
            })
        );
    }

    #[test]
    fn test_final_selected_record_label() {
        let record = MetricRecord::final_selected(sample_values());
        assert_eq!(record.model, SELECTED_MODEL_LABEL);
        assert_eq!(record.stage, RecordStage::FinalSelected);
        assert_eq!(record.stage.as_str(), "final_selected");
        assert_eq!(record.accuracy, 0.91);
        assert_eq!(record.roc_auc, 0.93);
    }

    #[test]
    fn test_record_key_order() {
        let record = MetricRecord::baseline(BaselineModel::XgBoost, sample_values());
        let text = serde_json::to_string(&record).expect("serialize record");
        let keys = ["model", "accuracy", "precision", "recall", "f1_score", "roc_auc", "stage"];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| text.find(&format!("\"{}\"", k)).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
