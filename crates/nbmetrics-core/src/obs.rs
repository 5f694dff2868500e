//! Structured log events for the summary pipeline.
//!
//! - Phase-scoped spans via the `PhaseSpan` RAII guard
//! - Emitters for run start/finish, per-phase counts and written artifacts

use crate::domain::Phase;
use std::path::Path;
use tracing::info;

/// Enters a span tagged with the pipeline phase for its lifetime.
pub struct PhaseSpan {
    _span: tracing::span::EnteredSpan,
}

impl PhaseSpan {
    pub fn enter(phase: &str) -> Self {
        let span = tracing::info_span!("nbmetrics.phase", phase = %phase);
        Self {
            _span: span.entered(),
        }
    }
}

pub fn emit_pipeline_started(notebook: &Path) {
    info!(event = "pipeline.started", notebook = %notebook.display());
}

/// Emit event: text collected from the notebook.
pub fn emit_collected(cells: usize, chunks: usize, bytes: usize) {
    info!(
        event = "stage.completed",
        stage = "collection",
        cells = cells,
        chunks = chunks,
        bytes = bytes,
    );
}

/// Emit event: per-matcher results of the extraction phase.
pub fn emit_extracted(baselines: usize, selected: bool, cv_metrics: usize, class_imbalance: bool) {
    info!(
        event = "stage.completed",
        stage = "extraction",
        baselines = baselines,
        selected = selected,
        cv_metrics = cv_metrics,
        class_imbalance = class_imbalance,
    );
}

pub fn emit_artifact_written(kind: &str, path: &Path) {
    info!(event = "artifact.written", kind = %kind, path = %path.display());
}

pub fn emit_pipeline_finished(duration_ms: u64, rows: usize) {
    info!(event = "pipeline.finished", duration_ms = duration_ms, rows = rows);
}

/// Emit event: the pipeline aborted (error level).
pub fn emit_pipeline_failed(phase: Phase, error: &dyn std::fmt::Display) {
    tracing::error!(event = "pipeline.failed", phase = %phase, error = %error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_span_enter() {
        let _span = PhaseSpan::enter("extraction");
        emit_extracted(2, true, 4, false);
    }
}
