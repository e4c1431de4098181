//! Benchmark ground truth and prediction records

pub mod categories;
pub mod loader;
pub mod predictions;

pub use categories::Category;
pub use loader::{load_ground_truth, load_ground_truth_from_str, LoadError};
pub use predictions::{PredictionRecord, PredictionScanner, ScanError};

use serde::{Deserialize, Serialize};

/// The authoritative answer and category for one benchmark item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTruthRecord {
    pub answer: String,
    pub question_type: Category,
}

/// Failure to resolve a prediction id against the ground truth
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("ID {id} is outside the ground truth range 1..={len}")]
    OutOfRange { id: i64, len: usize },

    #[error("ID {id} has unknown question type {label:?}")]
    UnknownCategory { id: i64, label: String },
}

/// Ground truth held as two parallel sequences in source order.
///
/// Position `i` is item id `i + 1`. Question types are kept as the raw
/// dataset labels and only resolved to a [`Category`] on lookup, so one bad
/// label affects only the predictions that reference it.
#[derive(Debug, Clone, Default)]
pub struct GroundTruth {
    answers: Vec<String>,
    question_types: Vec<String>,
}

impl GroundTruth {
    pub fn new(records: Vec<GroundTruthRecord>) -> Self {
        let (answers, question_types): (Vec<String>, Vec<String>) = records
            .into_iter()
            .map(|r| (r.answer, r.question_type.as_str().to_string()))
            .unzip();
        Self::from_parts(answers, question_types)
    }

    /// Build from parallel answer and raw label sequences of equal length
    pub(crate) fn from_parts(answers: Vec<String>, question_types: Vec<String>) -> Self {
        debug_assert_eq!(answers.len(), question_types.len());
        Self {
            answers,
            question_types,
        }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Raw question type labels as they appear in the dataset
    pub fn question_types(&self) -> &[String] {
        &self.question_types
    }

    /// Resolve a 1-based prediction id to its answer and category
    pub fn lookup(&self, id: i64) -> Result<(&str, Category), LookupError> {
        let out_of_range = || LookupError::OutOfRange {
            id,
            len: self.len(),
        };
        let idx = usize::try_from(id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .ok_or_else(out_of_range)?;

        match (self.answers.get(idx), self.question_types.get(idx)) {
            (Some(answer), Some(label)) => {
                let category = label
                    .parse::<Category>()
                    .map_err(|_| LookupError::UnknownCategory {
                        id,
                        label: label.clone(),
                    })?;
                Ok((answer.as_str(), category))
            }
            _ => Err(out_of_range()),
        }
    }
}
