use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::PathBuf;

/// Where the input line comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Numbers given on the command line, already joined with single spaces.
    Args(String),
    /// Read the whole file as the input text.
    File(PathBuf),
    /// Prompt on the console and read one line from stdin.
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: InputSource,
    pub output: OutputMode,
    pub detailed: bool,
    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
}

/// A contiguous strictly increasing stretch of the token sequence.
///
/// `len` is at least 1; a single element is a run on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

impl Run {
    /// One past the last index covered by the run.
    pub fn end(self) -> usize {
        self.start + self.len
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Outcome of analysing one input line, shared by the text, JSON and CSV outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    #[serde(default)]
    pub timestamp_utc: String,
    pub token_count: usize,
    /// `None` when the input held no tokens at all.
    pub run: Option<Run>,
    pub values: Vec<i64>,
    pub output: String,
}

impl RunReport {
    /// Pairs of (index in the input sequence, value) for every element of the run.
    pub fn indexed_values(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        let start = self.run.map(|r| r.start).unwrap_or(0);
        self.values
            .iter()
            .enumerate()
            .map(move |(offset, v)| (start + offset, *v))
    }
}
