//! Line-by-line scanning of JSONL prediction logs

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use serde::Deserialize;

/// One model answer, tagged with the 1-based id of the item it answers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictionRecord {
    pub id: i64,
    pub pred_answer: String,
}

/// A prediction line that could not be turned into a record
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: IO error: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Lazy scanner over a prediction log.
///
/// Yields one item per non-blank line in file order. Bad lines come back as
/// `Err` so the caller can report them and keep going.
pub struct PredictionScanner<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl PredictionScanner<BufReader<File>> {
    /// Open a prediction file for scanning
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> PredictionScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    /// Number of lines consumed so far, blank ones included
    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for PredictionScanner<R> {
    type Item = Result<PredictionRecord, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;

            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(ScanError::Io {
                        line: self.line_no,
                        source,
                    }))
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            return Some(parse_prediction_line(&line).map_err(|message| ScanError::Parse {
                line: self.line_no,
                message,
            }));
        }
    }
}

/// Parse a single JSONL line into a prediction record
pub fn parse_prediction_line(line: &str) -> Result<PredictionRecord, String> {
    serde_json::from_str(line).map_err(|e| e.to_string())
}
