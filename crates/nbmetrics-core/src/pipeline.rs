//! Sequential collection → extraction → assembly → serialization run.

use crate::assemble::{assemble_summary, comparison_rows};
use crate::config::PipelineConfig;
use crate::domain::{ComparisonRow, Result, Summary};
use crate::extract::ExtractionEngine;
use crate::notebook::{collect_output_text, read_notebook, TextStream};
use crate::obs::{self, PhaseSpan};
use crate::reporting::{write_comparison_csv, write_summary_json};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub summary: Summary,
    pub rows: Vec<ComparisonRow>,
    pub json_out: PathBuf,
    pub csv_out: PathBuf,
    pub duration_ms: u64,
}

/// Summary pipeline. Holds compiled matchers; no state survives a run.
pub struct SummaryPipeline {
    engine: ExtractionEngine,
}

impl SummaryPipeline {
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: ExtractionEngine::new()?,
        })
    }

    /// Read a notebook and collect its console text.
    ///
    /// The parsed document is dropped before this returns.
    pub fn collect(&self, notebook_path: &Path) -> Result<TextStream> {
        let _span = PhaseSpan::enter("collection");
        let notebook = read_notebook(notebook_path)?;
        let stream = collect_output_text(&notebook);
        obs::emit_collected(notebook.cells.len(), stream.chunk_count(), stream.as_str().len());
        Ok(stream)
    }

    /// Build the summary for a notebook without writing anything.
    pub fn summarize(&self, notebook_path: &Path) -> Result<Summary> {
        let stream = self.collect(notebook_path)?;

        let extraction = {
            let _span = PhaseSpan::enter("extraction");
            let extraction = self.engine.extract(&stream)?;
            obs::emit_extracted(
                extraction.baselines.len(),
                extraction.selected.is_some(),
                extraction.cross_validation.len(),
                extraction.class_imbalance.is_some(),
            );
            extraction
        };

        let _span = PhaseSpan::enter("assembly");
        Ok(assemble_summary(notebook_path, extraction))
    }

    /// Summarise the configured notebook and write both artifacts.
    ///
    /// The JSON document is written before the CSV; a CSV failure does not
    /// remove it.
    pub fn run(&self, config: &PipelineConfig) -> Result<PipelineOutcome> {
        let start = Instant::now();
        obs::emit_pipeline_started(&config.notebook);

        let result = self.run_phases(config);
        let (summary, rows) = match result {
            Ok(done) => done,
            Err(err) => {
                obs::emit_pipeline_failed(err.phase(), &err);
                return Err(err);
            }
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        obs::emit_pipeline_finished(duration_ms, rows.len());

        Ok(PipelineOutcome {
            summary,
            rows,
            json_out: config.json_out.clone(),
            csv_out: config.csv_out.clone(),
            duration_ms,
        })
    }

    fn run_phases(&self, config: &PipelineConfig) -> Result<(Summary, Vec<ComparisonRow>)> {
        let summary = self.summarize(&config.notebook)?;
        let rows = comparison_rows(&summary);

        let _span = PhaseSpan::enter("serialization");
        write_summary_json(&config.json_out, &summary)?;
        obs::emit_artifact_written("summary_json", &config.json_out);
        write_comparison_csv(&config.csv_out, &rows)?;
        obs::emit_artifact_written("comparison_csv", &config.csv_out);

        Ok((summary, rows))
    }
}

/// Run the pipeline once with a fresh engine.
pub fn run(config: &PipelineConfig) -> Result<PipelineOutcome> {
    SummaryPipeline::new()?.run(config)
}
