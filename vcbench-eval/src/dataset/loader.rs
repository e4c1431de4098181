//! Ground truth loading from JSON files

use std::path::Path;
use serde::Deserialize;

use super::{Category, GroundTruth};

/// Error type for ground truth loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Item {index}: missing field {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("Ground truth contains no items")]
    Empty,
}

/// Raw item as stored in the dataset file; extra fields are ignored
#[derive(Debug, Deserialize)]
struct RawItem {
    answer: Option<String>,
    question_type: Option<String>,
}

/// Load ground truth from a JSON file
pub fn load_ground_truth(path: impl AsRef<Path>) -> Result<GroundTruth, LoadError> {
    let content = std::fs::read_to_string(path)?;
    load_ground_truth_from_str(&content)
}

/// Load ground truth from a JSON string holding an array of items
pub fn load_ground_truth_from_str(content: &str) -> Result<GroundTruth, LoadError> {
    let items: Vec<RawItem> =
        serde_json::from_str(content).map_err(|e| LoadError::Parse(e.to_string()))?;

    if items.is_empty() {
        return Err(LoadError::Empty);
    }

    let (answers, question_types): (Vec<String>, Vec<String>) = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_item(index, item))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .unzip();

    // Unknown labels only fail the predictions that reference them
    let unknown = question_types
        .iter()
        .filter(|label| label.parse::<Category>().is_err())
        .count();
    if unknown > 0 {
        tracing::warn!("{} ground truth item(s) have an unknown question type", unknown);
    }

    tracing::debug!("Loaded {} ground truth items", answers.len());
    Ok(GroundTruth::from_parts(answers, question_types))
}

fn parse_item(index: usize, item: RawItem) -> Result<(String, String), LoadError> {
    let answer = item.answer.ok_or(LoadError::MissingField {
        index,
        field: "answer",
    })?;
    let question_type = item.question_type.ok_or(LoadError::MissingField {
        index,
        field: "question_type",
    })?;

    Ok((answer, question_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_basic() {
        let json = r#"[
            {"answer": "B", "question_type": "cube", "question": "Which net folds into a cube?"},
            {"answer": "A", "question_type": "shape"}
        ]"#;

        let gt = load_ground_truth_from_str(json).unwrap();
        assert_eq!(gt.len(), 2);
        assert_eq!(gt.answers()[0], "B");
        assert_eq!(gt.question_types()[1], "shape");
    }

    #[test]
    fn test_load_missing_answer() {
        let json = r#"[
            {"answer": "B", "question_type": "cube"},
            {"question_type": "shape"}
        ]"#;

        match load_ground_truth_from_str(json) {
            Err(LoadError::MissingField { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "answer");
            }
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_question_type() {
        let json = r#"[{"answer": "B"}]"#;
        assert!(matches!(
            load_ground_truth_from_str(json),
            Err(LoadError::MissingField { field: "question_type", .. })
        ));
    }

    #[test]
    fn test_load_keeps_unknown_category() {
        let json = r#"[
            {"answer": "B", "question_type": "cube"},
            {"answer": "A", "question_type": "Geometry"}
        ]"#;

        let gt = load_ground_truth_from_str(json).unwrap();
        assert_eq!(gt.len(), 2);
        assert_eq!(gt.question_types()[1], "Geometry");
        assert_eq!(gt.lookup(1).unwrap(), ("B", Category::Cube));
        assert!(matches!(
            gt.lookup(2),
            Err(crate::dataset::LookupError::UnknownCategory { id: 2, .. })
        ));
    }

    #[test]
    fn test_load_invalid_json() {
        assert!(matches!(
            load_ground_truth_from_str("{not json"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            load_ground_truth_from_str(r#"{"answer": "B"}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_load_empty() {
        assert!(matches!(load_ground_truth_from_str("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"answer": "C", "question_type": "clock"}}]"#).unwrap();

        let gt = load_ground_truth(file.path()).unwrap();
        assert_eq!(gt.lookup(1).unwrap(), ("C", Category::Clock));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_ground_truth("does/not/exist.json"),
            Err(LoadError::Io(_))
        ));
    }
}
