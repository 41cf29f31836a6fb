//! Configuration for the upstream chat-completion client

use serde::{Deserialize, Serialize};

/// Configuration for the chat-completion upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Provider selector; only `lmstudio` is currently supported
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Base URL of the chat-completion server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Context window reported when the upstream does not state one
    #[serde(default = "default_context_length")]
    pub context_length: u32,

    /// Maximum tokens to request per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-p (nucleus) sampling
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_provider() -> String {
    "lmstudio".to_string()
}

fn default_base_url() -> String {
    "http://localhost:1234/v1".to_string()
}

const fn default_context_length() -> u32 {
    4096
}

const fn default_max_tokens() -> u32 {
    2048
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_top_p() -> f32 {
    0.95
}

const fn default_timeout_ms() -> u64 {
    60000
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_base_url(),
            context_length: default_context_length(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl CompletionConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_string("LLM_PROVIDER").unwrap_or(defaults.provider),
            base_url: env_string("LLM_API_URL").unwrap_or(defaults.base_url),
            context_length: env_parsed("LMSTUDIO_CONTEXT_LENGTH")
                .unwrap_or(defaults.context_length),
            max_tokens: env_parsed("LMSTUDIO_MAX_TOKENS").unwrap_or(defaults.max_tokens),
            temperature: env_parsed("LMSTUDIO_TEMPERATURE").unwrap_or(defaults.temperature),
            top_p: env_parsed("LMSTUDIO_TOP_P").unwrap_or(defaults.top_p),
            timeout_ms: defaults.timeout_ms,
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env_string(name).and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_lmstudio_defaults() {
        let config = CompletionConfig::default();
        assert_eq!(config.provider, "lmstudio");
        assert_eq!(config.base_url, "http://localhost:1234/v1");
        assert_eq!(config.context_length, 4096);
        assert_eq!(config.max_tokens, 2048);
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert!((config.top_p - 0.95).abs() < f32::EPSILON);
        assert_eq!(config.timeout_ms, 60000);
    }

    #[test]
    fn deserialization_with_defaults() {
        let config: CompletionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.provider, "lmstudio");
        assert_eq!(config.context_length, 4096);
    }

    #[test]
    fn deserialization_overrides() {
        let json = r#"{"provider": "other", "base_url": "http://host:9000/v1"}"#;
        let config: CompletionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.provider, "other");
        assert_eq!(config.base_url, "http://host:9000/v1");
    }
}
