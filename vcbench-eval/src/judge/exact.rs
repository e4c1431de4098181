use async_trait::async_trait;

use super::{Judge, JudgeError, Judgment};

/// Byte-for-byte comparison, no case folding or trimming
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchJudge;

#[async_trait]
impl Judge for ExactMatchJudge {
    fn name(&self) -> &str {
        "exact_match"
    }

    async fn evaluate(&self, response: &str, answer: &str) -> Result<Judgment, JudgeError> {
        Ok(Judgment::from(response == answer))
    }
}
