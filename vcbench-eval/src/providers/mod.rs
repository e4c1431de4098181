//! LLM Provider implementations

pub mod dashscope;
pub mod traits;

pub use dashscope::DashScopeClient;
pub use traits::{
    CompletionRequest, CompletionResponse, LLMProvider, Message, ProviderError, ProviderResult,
};
