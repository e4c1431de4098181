//! DashScope text-generation API client (Qwen models)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::traits::{
    CompletionRequest, CompletionResponse, LLMProvider, Message, ProviderError, ProviderResult,
};
use crate::config::JudgeConfig;

const DEFAULT_BASE_URL: &str = "https://dashscope.aliyuncs.com/api/v1";
const DEFAULT_MODEL: &str = "qwen-plus";
const GENERATION_PATH: &str = "/services/aigc/text-generation/generation";

/// DashScope API client using the native generation endpoint
pub struct DashScopeClient {
    api_key: String,
    base_url: String,
    http_client: Client,
    default_model: String,
}

impl DashScopeClient {
    /// Create a new DashScope client
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: Client::new(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from a resolved judge configuration
    pub fn from_config(config: &JudgeConfig) -> Self {
        Self::new(config.api_key.clone())
            .with_base_url(&config.base_url)
            .with_model(&config.model)
    }

    /// Set custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set default model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATION_PATH)
    }
}

#[derive(Serialize)]
struct DashScopeRequest {
    model: String,
    input: DashScopeInput,
    parameters: DashScopeParameters,
}

#[derive(Serialize)]
struct DashScopeInput {
    messages: Vec<DashScopeMessage>,
}

#[derive(Serialize)]
struct DashScopeParameters {
    result_format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize, Deserialize)]
struct DashScopeMessage {
    role: String,
    content: String,
}

impl From<&Message> for DashScopeMessage {
    fn from(msg: &Message) -> Self {
        Self {
            role: msg.role.clone(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Deserialize)]
struct DashScopeResponse {
    output: DashScopeOutput,
}

#[derive(Deserialize)]
struct DashScopeOutput {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: DashScopeMessage,
}

#[derive(Deserialize)]
struct DashScopeError {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// Build the failure message for a non-success response body
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<DashScopeError>(body) {
        Ok(DashScopeError { code: Some(code), message }) => format!("{}: {}", code, message),
        Ok(DashScopeError { code: None, message }) => message,
        Err(_) => format!("HTTP {}: {}", status, body),
    }
}

/// Extract the judgment text from a successful response body
fn parse_success(body: &str) -> ProviderResult<String> {
    let api_response: DashScopeResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;

    let choice = api_response
        .output
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Parse("No choices in response".to_string()))?;

    Ok(choice.message.content)
}

#[async_trait]
impl LLMProvider for DashScopeClient {
    fn name(&self) -> &str {
        "dashscope"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        let start = Instant::now();

        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.default_model.clone());

        let body = DashScopeRequest {
            model: model.clone(),
            input: DashScopeInput {
                messages: request.messages.iter().map(Into::into).collect(),
            },
            parameters: DashScopeParameters {
                result_format: "message",
                temperature: request.temperature,
                max_tokens: request.max_tokens,
            },
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &text),
            });
        }

        Ok(CompletionResponse {
            content: parse_success(&text)?,
            model,
            latency_ms,
        })
    }
}
