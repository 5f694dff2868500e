//! Input/output locations for a summary run.

use std::path::PathBuf;

pub const DEFAULT_NOTEBOOK: &str = "notebooks/road_collisions_classification.ipynb";
pub const DEFAULT_JSON_OUT: &str = "results/metrics_summary.json";
pub const DEFAULT_CSV_OUT: &str = "results/model_comparison.csv";

/// Paths for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Executed notebook to read.
    pub notebook: PathBuf,

    /// Summary JSON document to write.
    pub json_out: PathBuf,

    /// Model comparison CSV to write.
    pub csv_out: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            notebook: PathBuf::from(DEFAULT_NOTEBOOK),
            json_out: PathBuf::from(DEFAULT_JSON_OUT),
            csv_out: PathBuf::from(DEFAULT_CSV_OUT),
        }
    }
}

impl PipelineConfig {
    pub fn new(notebook: PathBuf, json_out: PathBuf, csv_out: PathBuf) -> Self {
        Self {
            notebook,
            json_out,
            csv_out,
        }
    }

    pub fn with_notebook(mut self, notebook: impl Into<PathBuf>) -> Self {
        self.notebook = notebook.into();
        self
    }

    pub fn with_json_out(mut self, json_out: impl Into<PathBuf>) -> Self {
        self.json_out = json_out.into();
        self
    }

    pub fn with_csv_out(mut self, csv_out: impl Into<PathBuf>) -> Self {
        self.csv_out = csv_out.into();
        self
    }
}
