//! Error taxonomy for the summary pipeline.
//!
//! A matcher finding nothing is never an error; it leaves the matching
//! aggregate field empty. Everything here is fatal and aborts the run.

use std::fmt;
use std::path::PathBuf;

/// Pipeline phase an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Collection,
    Extraction,
    Serialization,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Collection => "collection",
            Phase::Extraction => "extraction",
            Phase::Serialization => "serialization",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while summarising notebook output.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("failed to read notebook {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("notebook lacks required structure: {0}")]
    Structural(String),

    #[error("invalid matcher pattern '{name}': {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("captured {field} value {raw:?} is not numeric")]
    NumericDecode { field: &'static str, raw: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SummaryError {
    /// The phase that produced this error.
    pub fn phase(&self) -> Phase {
        match self {
            SummaryError::Read { .. } | SummaryError::Structural(_) => Phase::Collection,
            SummaryError::Pattern { .. } | SummaryError::NumericDecode { .. } => Phase::Extraction,
            SummaryError::Serialization(_) | SummaryError::Write { .. } => Phase::Serialization,
        }
    }
}

/// Result type for summary pipeline operations.
pub type Result<T> = std::result::Result<T, SummaryError>;
