//! Executed-notebook loading and console output collection.
//!
//! Only the parts of the notebook format needed to recover printed text are
//! modelled; everything else (sources, metadata, image payloads) is ignored
//! during deserialization.

use crate::domain::{Result, SummaryError};
use serde::Deserialize;
use std::path::Path;

/// Notebook document: an ordered list of cells.
#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub cell_type: String,

    #[serde(default)]
    pub outputs: Vec<Output>,
}

impl Cell {
    pub fn is_code(&self) -> bool {
        self.cell_type == "code"
    }
}

/// A single cell output. Only stream text and plain-text results are read.
#[derive(Debug, Clone, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub output_type: Option<String>,

    #[serde(default)]
    pub text: Option<MultilineText>,

    #[serde(default)]
    pub data: Option<OutputData>,
}

impl Output {
    pub fn is_execute_result(&self) -> bool {
        self.output_type.as_deref() == Some("execute_result")
    }

    /// Printed text carried by this output, if any.
    ///
    /// Stream text wins; otherwise an `execute_result` contributes its
    /// non-empty `text/plain` representation.
    pub fn console_text(&self) -> Option<String> {
        if let Some(text) = &self.text {
            return Some(text.joined());
        }
        if !self.is_execute_result() {
            return None;
        }
        self.data
            .as_ref()
            .and_then(|data| data.text_plain.as_ref())
            .map(MultilineText::joined)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputData {
    #[serde(rename = "text/plain", default)]
    pub text_plain: Option<MultilineText>,
}

/// Notebook text: either one string or a list of line fragments.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MultilineText {
    Single(String),
    Lines(Vec<String>),
}

impl MultilineText {
    /// Concatenate fragments with no separator; they carry their own newlines.
    pub fn joined(&self) -> String {
        match self {
            MultilineText::Single(text) => text.clone(),
            MultilineText::Lines(lines) => lines.concat(),
        }
    }
}

/// Ordered console text of a notebook, one chunk per output, newline-joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStream {
    text: String,
    chunks: usize,
}

impl TextStream {
    pub fn from_chunks<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut count = 0;
        for chunk in chunks {
            if count > 0 {
                text.push('\n');
            }
            text.push_str(chunk.as_ref());
            count += 1;
        }
        Self {
            text,
            chunks: count,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of output chunks the stream was built from.
    pub fn chunk_count(&self) -> usize {
        self.chunks
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Parse notebook JSON.
pub fn parse_notebook(raw: &str) -> Result<Notebook> {
    serde_json::from_str(raw).map_err(|e| SummaryError::Structural(e.to_string()))
}

/// Read and parse a notebook file. The file is released before returning.
pub fn read_notebook(path: &Path) -> Result<Notebook> {
    let raw = std::fs::read_to_string(path).map_err(|source| SummaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_notebook(&raw)
}

/// Collect every code cell's console text in document order.
pub fn collect_output_text(notebook: &Notebook) -> TextStream {
    let chunks = notebook
        .cells
        .iter()
        .filter(|cell| cell.is_code())
        .flat_map(|cell| cell.outputs.iter())
        .filter_map(Output::console_text);
    TextStream::from_chunks(chunks)
}
