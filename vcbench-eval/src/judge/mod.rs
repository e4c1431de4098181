//! Correctness judges
//!
//! A [`Judge`] decides whether one predicted answer matches its ground truth.
//! The evaluator only sees this trait, so exact matching, a remote LLM judge
//! or a test stub can be wired in interchangeably.

pub mod exact;
pub mod prompts;
pub mod remote;

pub use exact::ExactMatchJudge;
pub use prompts::build_judge_prompt;
pub use remote::{is_affirmative, RemoteLLMJudge, AFFIRMATIVE_TOKENS};

use async_trait::async_trait;

use crate::providers::ProviderError;

/// Outcome of judging one prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgment {
    Correct,
    Incorrect,
}

impl Judgment {
    pub fn is_correct(&self) -> bool {
        matches!(self, Judgment::Correct)
    }
}

impl From<bool> for Judgment {
    fn from(correct: bool) -> Self {
        if correct {
            Judgment::Correct
        } else {
            Judgment::Incorrect
        }
    }
}

/// A judge call that produced no verdict
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Capability to decide whether a response answers a question correctly
#[async_trait]
pub trait Judge: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Judge a model response against the correct answer
    async fn evaluate(&self, response: &str, answer: &str) -> Result<Judgment, JudgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judgment_from_bool() {
        assert!(Judgment::from(true).is_correct());
        assert!(!Judgment::from(false).is_correct());
    }
}
