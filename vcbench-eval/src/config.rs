//! Configuration management for VCBench evaluation
//!
//! Loads judge settings from TOML files and resolves the judge credential from
//! the environment once, at startup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default ground truth location inside a VCBench checkout
pub const DEFAULT_GT_FILE: &str = "data/VCBench_with_answer.json";

/// Default prediction log name
pub const DEFAULT_PRED_FILE: &str = "predictions.jsonl";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub judge: JudgeSettings,
}

/// Judge service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Optional cap on judge reply length; unset sends no limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

// Default value functions
fn default_model() -> String { "qwen-plus".to_string() }
fn default_base_url() -> String { "https://dashscope.aliyuncs.com/api/v1".to_string() }
fn default_api_key_env() -> String { "DASHSCOPE_KEY".to_string() }

impl Default for JudgeSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            max_tokens: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from the first default config location that exists, or return defaults.
    ///
    /// A config file that exists but does not parse is an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let config_paths = [
            "config/judge.toml",
            "vcbench-eval/config/judge.toml",
        ];

        for path in &config_paths {
            if Path::new(path).is_file() {
                let config = Self::from_file(path)?;
                tracing::info!("Loaded configuration from {}", path);
                return Ok(config);
            }
        }

        tracing::debug!("Using default configuration");
        Ok(Self::default())
    }
}

/// Everything the remote judge client needs, credential included
#[derive(Clone, PartialEq)]
pub struct JudgeConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: Option<u32>,
}

impl JudgeConfig {
    /// Resolve the judge configuration, reading the credential from the process environment
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::from_settings(&config.judge, |name| std::env::var(name).ok())
    }

    /// Resolve the judge configuration with an explicit variable lookup
    pub fn from_settings<F>(settings: &JudgeSettings, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(&settings.api_key_env)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingCredential(settings.api_key_env.clone()))?;

        Ok(Self {
            api_key,
            model: settings.model.clone(),
            base_url: settings.base_url.clone(),
            max_tokens: settings.max_tokens,
        })
    }
}

impl std::fmt::Debug for JudgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JudgeConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{0} environment variable not set")]
    MissingCredential(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.judge.model, "qwen-plus");
        assert_eq!(config.judge.api_key_env, "DASHSCOPE_KEY");
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[judge]
model = "qwen-max"
api_key_env = "MY_JUDGE_KEY"
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.judge.model, "qwen-max");
        assert_eq!(config.judge.api_key_env, "MY_JUDGE_KEY");
        assert_eq!(config.judge.base_url, default_base_url());
        assert_eq!(config.judge.max_tokens, None);
    }

    #[test]
    fn test_reply_cap_carried_to_judge_config() {
        let config = Config::from_toml("[judge]\nmax_tokens = 8\n").unwrap();
        assert_eq!(config.judge.max_tokens, Some(8));

        let judge = JudgeConfig::from_settings(&config.judge, |_| Some("sk-test".to_string())).unwrap();
        assert_eq!(judge.max_tokens, Some(8));
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.judge, JudgeSettings::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(Config::from_toml("[judge"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_credential_resolved() {
        let settings = JudgeSettings::default();
        let judge = JudgeConfig::from_settings(&settings, |name| {
            (name == "DASHSCOPE_KEY").then(|| "sk-test".to_string())
        })
        .unwrap();
        assert_eq!(judge.api_key, "sk-test");
        assert_eq!(judge.model, "qwen-plus");
        assert!(!format!("{:?}", judge).contains("sk-test"));
    }

    #[test]
    fn test_missing_credential() {
        let settings = JudgeSettings::default();
        let err = JudgeConfig::from_settings(&settings, |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(ref name) if name == "DASHSCOPE_KEY"));
        assert_eq!(err.to_string(), "DASHSCOPE_KEY environment variable not set");

        let blank = JudgeConfig::from_settings(&settings, |_| Some("  ".to_string()));
        assert!(blank.is_err());
    }
}
