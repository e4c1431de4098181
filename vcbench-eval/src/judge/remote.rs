//! LLM-backed judge

use std::sync::Arc;

use async_trait::async_trait;

use super::{build_judge_prompt, Judge, JudgeError, Judgment};
use crate::config::JudgeConfig;
use crate::providers::{CompletionRequest, DashScopeClient, LLMProvider, Message};

/// Replies counted as a "yes" verdict, compared after lower-casing
pub const AFFIRMATIVE_TOKENS: [&str; 5] = ["yes", "yes.", "y", "correct", "correct."];

/// Whether a judge reply is an affirmative verdict.
///
/// Only surrounding whitespace is ignored; hedged replies such as
/// "I think yes, but..." are negative.
pub fn is_affirmative(reply: &str) -> bool {
    let reply = reply.trim().to_lowercase();
    AFFIRMATIVE_TOKENS.contains(&reply.as_str())
}

/// Judge that asks an LLM whether the response is correct.
///
/// One deterministic (temperature 0) single-turn call per record, no retry.
pub struct RemoteLLMJudge {
    provider: Arc<dyn LLMProvider + Send + Sync>,
    model: Option<String>,
    max_tokens: Option<u32>,
}

impl RemoteLLMJudge {
    pub fn new(provider: Arc<dyn LLMProvider + Send + Sync>) -> Self {
        Self {
            provider,
            model: None,
            max_tokens: None,
        }
    }

    /// Build a judge backed by the DashScope API
    pub fn from_config(config: &JudgeConfig) -> Self {
        let judge = Self::new(Arc::new(DashScopeClient::from_config(config))).with_model(&config.model);
        match config.max_tokens {
            Some(max_tokens) => judge.with_max_tokens(max_tokens),
            None => judge,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Cap the judge reply length; without a cap none is sent
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    fn request(&self, response: &str, answer: &str) -> CompletionRequest {
        let prompt = build_judge_prompt(response, answer);
        let mut request = CompletionRequest::new(vec![Message::user(prompt)]).with_temperature(0.0);
        if let Some(model) = &self.model {
            request = request.with_model(model);
        }
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        request
    }
}

#[async_trait]
impl Judge for RemoteLLMJudge {
    fn name(&self) -> &str {
        self.provider.name()
    }

    async fn evaluate(&self, response: &str, answer: &str) -> Result<Judgment, JudgeError> {
        let request = self.request(response, answer);
        let completion = self.provider.complete(&request).await?;

        tracing::debug!(
            model = %completion.model,
            latency_ms = completion.latency_ms,
            reply = %completion.content,
            "Judge replied"
        );

        Ok(Judgment::from(is_affirmative(&completion.content)))
    }
}
