//! nbmetrics - notebook metrics summary CLI
//!
//! Reads an executed evaluation notebook and writes:
//!
//! - a JSON summary of baseline, selected-model, cross-validation and
//!   class-imbalance metrics
//! - a CSV comparison table of baseline and selected models

use anyhow::Result;
use clap::Parser;
use nbmetrics_core::config::{DEFAULT_CSV_OUT, DEFAULT_JSON_OUT, DEFAULT_NOTEBOOK};
use nbmetrics_core::{LogFormat, PipelineConfig, SummaryPipeline};
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "nbmetrics")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse key metrics from executed notebook outputs into JSON and CSV", long_about = None)]
struct Cli {
    /// Path to the executed notebook
    #[arg(long, default_value = DEFAULT_NOTEBOOK)]
    notebook: PathBuf,

    /// Output JSON summary path
    #[arg(long, default_value = DEFAULT_JSON_OUT)]
    json_out: PathBuf,

    /// Output CSV comparison path
    #[arg(long, default_value = DEFAULT_CSV_OUT)]
    csv_out: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(
            self.notebook.clone(),
            self.json_out.clone(),
            self.csv_out.clone(),
        )
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    nbmetrics_core::init_tracing(LogFormat::from_json_flag(cli.json), level);

    let config = cli.pipeline_config();
    debug!(?config, "resolved paths");

    let outcome = SummaryPipeline::new()
        .and_then(|pipeline| pipeline.run(&config))
        .map_err(|err| {
            let phase = err.phase();
            anyhow::Error::new(err).context(format!("{} stage failed", phase))
        })?;

    println!("Wrote JSON summary: {}", outcome.json_out.display());
    println!("Wrote model CSV: {}", outcome.csv_out.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_pipeline_config() {
        let cli = Cli::parse_from(["nbmetrics"]);
        assert_eq!(cli.pipeline_config(), PipelineConfig::default());
        assert!(!cli.verbose);
        assert!(!cli.json);
    }

    #[test]
    fn path_overrides() {
        let cli = Cli::parse_from([
            "nbmetrics",
            "--notebook",
            "nb/run.ipynb",
            "--json-out",
            "out/summary.json",
            "--csv-out",
            "out/table.csv",
        ]);
        let config = cli.pipeline_config();
        assert_eq!(config.notebook, PathBuf::from("nb/run.ipynb"));
        assert_eq!(config.json_out, PathBuf::from("out/summary.json"));
        assert_eq!(config.csv_out, PathBuf::from("out/table.csv"));
    }
}
