//! Structural assembly of the summary aggregate.

use crate::domain::{ComparisonRow, Summary};
use crate::extract::Extraction;
use std::path::{Component, Path};

/// Merge extraction results with their source path into a [`Summary`].
///
/// The source path is rendered with `/` separators so documents are stable
/// across platforms.
pub fn assemble_summary(source: &Path, extraction: Extraction) -> Summary {
    Summary {
        source_notebook: portable_path(source),
        baseline_model_metrics: extraction.baselines,
        final_selected_model: extraction.selected,
        cross_validation_summary: extraction.cross_validation,
        class_imbalance: extraction.class_imbalance,
    }
}

/// Comparison table rows: baselines in order, then the selected model.
pub fn comparison_rows(summary: &Summary) -> Vec<ComparisonRow> {
    summary
        .baseline_model_metrics
        .iter()
        .chain(summary.final_selected_model.iter())
        .map(ComparisonRow::from)
        .collect()
}

// `/`-joined components with `.` segments and repeated separators dropped.
fn portable_path(path: &Path) -> String {
    let mut rendered = String::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => rendered.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => rendered.push('/'),
            Component::CurDir => continue,
            Component::ParentDir => push_segment(&mut rendered, ".."),
            Component::Normal(segment) => push_segment(&mut rendered, &segment.to_string_lossy()),
        }
    }
    if rendered.is_empty() {
        rendered.push('.');
    }
    rendered
}

fn push_segment(rendered: &mut String, segment: &str) {
    if !rendered.is_empty() && !rendered.ends_with('/') && !rendered.ends_with(':') {
        rendered.push('/');
    }
    rendered.push_str(segment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BaselineModel, ClassImbalance, CvMetric, MeanStd, MetricRecord, MetricValues, RecordStage,
    };

    fn values(accuracy: f64) -> MetricValues {
        MetricValues {
            accuracy,
            precision: 0.5,
            recall: 0.6,
            f1_score: 0.55,
            roc_auc: 0.8,
        }
    }

    #[test]
    fn test_assemble_moves_every_fact() {
        let mut extraction = Extraction {
            baselines: vec![MetricRecord::baseline(BaselineModel::DecisionTree, values(0.7))],
            selected: Some(MetricRecord::final_selected(values(0.8))),
            class_imbalance: Some(ClassImbalance {
                severe_or_fatal_count: 12,
                severe_or_fatal_pct: 1.5,
            }),
            ..Default::default()
        };
        extraction
            .cross_validation
            .insert(CvMetric::Precision, MeanStd { mean: 0.4, std: 0.1 });

        let summary = assemble_summary(Path::new("notebooks/run.ipynb"), extraction.clone());
        assert_eq!(summary.source_notebook, "notebooks/run.ipynb");
        assert_eq!(summary.baseline_model_metrics, extraction.baselines);
        assert_eq!(summary.final_selected_model, extraction.selected);
        assert_eq!(summary.cross_validation_summary, extraction.cross_validation);
        assert_eq!(summary.class_imbalance, extraction.class_imbalance);
    }

    #[test]
    fn test_comparison_rows_put_selected_last() {
        let extraction = Extraction {
            baselines: vec![
                MetricRecord::baseline(BaselineModel::XgBoost, values(0.9)),
                MetricRecord::baseline(BaselineModel::LogisticRegression, values(0.8)),
            ],
            selected: Some(MetricRecord::final_selected(values(0.85))),
            ..Default::default()
        };
        let rows = comparison_rows(&assemble_summary(Path::new("nb.ipynb"), extraction));

        let stages: Vec<RecordStage> = rows.iter().map(|r| r.stage).collect();
        assert_eq!(
            stages,
            vec![RecordStage::Baseline, RecordStage::Baseline, RecordStage::FinalSelected]
        );
        assert_eq!(rows[0].model, "XGBoost");
        assert_eq!(rows[1].model, "Logistic Regression");
        assert_eq!(rows[2].accuracy, 0.85);
    }

    #[test]
    fn test_comparison_rows_without_selected() {
        let extraction = Extraction {
            baselines: vec![MetricRecord::baseline(BaselineModel::RandomForest, values(0.9))],
            ..Default::default()
        };
        let rows = comparison_rows(&assemble_summary(Path::new("nb.ipynb"), extraction));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].stage, RecordStage::Baseline);
    }

    #[test]
    fn test_source_path_is_normalized() {
        assert_eq!(portable_path(Path::new("./notebooks//run.ipynb")), "notebooks/run.ipynb");
        assert_eq!(portable_path(Path::new("/abs//a/./b.ipynb")), "/abs/a/b.ipynb");
        assert_eq!(portable_path(Path::new("../up/nb.ipynb")), "../up/nb.ipynb");
        assert_eq!(portable_path(Path::new("notebooks/run.ipynb/")), "notebooks/run.ipynb");
        assert_eq!(portable_path(Path::new(".")), ".");
        assert_eq!(portable_path(Path::new("")), ".");
    }

    #[test]
    fn test_summary_records_normalized_source() {
        let summary = assemble_summary(Path::new("./notebooks//run.ipynb"), Extraction::default());
        assert_eq!(summary.source_notebook, "notebooks/run.ipynb");
    }
}
