//! Textual shapes recognised in notebook console output.

use crate::domain::{BaselineModel, Result, SummaryError};
use regex::Regex;

/// Header printed above the tuned model's evaluation block.
pub const SELECTED_BLOCK_HEADER: &str = "Logistic Regression (Tuned (GridSearchCV)):";

/// Compiled matchers, one per fact category.
#[derive(Debug, Clone)]
pub struct Matchers {
    /// `<Model> Acc: f | Precision: f | Recall: f | F1: f | ROC-AUC: f`, one line.
    pub baseline_line: Regex,

    /// Selected-model header followed by five labelled lines in fixed order.
    pub selected_block: Regex,

    /// `<Label>: <mean> ± <std>` or `<Label>: <mean> - <std>`.
    pub cv_metric_line: Regex,

    /// `Severe/Fatal accidents: 1,234 (5.6% of total)`.
    pub class_imbalance_line: Regex,
}

impl Matchers {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            baseline_line: compile("baseline_line", &baseline_line_pattern())?,
            selected_block: compile("selected_block", &selected_block_pattern())?,
            cv_metric_line: compile(
                "cv_metric_line",
                r"(?P<label>Accuracy|Precision|Recall|F1-Score):[ \t]*(?P<mean>[0-9.]+)[ \t]*[±-][ \t]*(?P<std>[0-9.]+)",
            )?,
            class_imbalance_line: compile(
                "class_imbalance_line",
                r"Severe/Fatal accidents:\s*(?P<count>[0-9,]+)\s*\((?P<pct>[0-9.]+)% of total\)",
            )?,
        })
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| SummaryError::Pattern { name, source })
}

fn baseline_line_pattern() -> String {
    let models = BaselineModel::ALL
        .iter()
        .map(|m| regex::escape(m.display_name()))
        .collect::<Vec<_>>()
        .join("|");
    format!(
        r"\b(?P<model>{models})[ \t]+Acc:[ \t]*(?P<accuracy>[0-9.]+)[ \t]*\|[ \t]*Precision:[ \t]*(?P<precision>[0-9.]+)[ \t]*\|[ \t]*Recall:[ \t]*(?P<recall>[0-9.]+)[ \t]*\|[ \t]*F1:[ \t]*(?P<f1_score>[0-9.]+)[ \t]*\|[ \t]*ROC-AUC:[ \t]*(?P<roc_auc>[0-9.]+)"
    )
}

// Recall may carry a trailing annotation, e.g. "(minority class)"; it is skipped.
fn selected_block_pattern() -> String {
    format!(
        concat!(
            r"{header}\s*\n",
            r"\s*Accuracy:\s*(?P<accuracy>[0-9.]+)\s*\n",
            r"\s*Precision:\s*(?P<precision>[0-9.]+)\s*\n",
            r"\s*Recall:\s*(?P<recall>[0-9.]+)[^\n]*\n",
            r"\s*F1-Score:\s*(?P<f1_score>[0-9.]+)\s*\n",
            r"\s*ROC-AUC:\s*(?P<roc_auc>[0-9.]+)",
        ),
        header = regex::escape(SELECTED_BLOCK_HEADER)
    )
}
