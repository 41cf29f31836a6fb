//! Configuration for the local generation model

use serde::{Deserialize, Serialize};

/// Configuration for the llama.cpp generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Path to the GGUF model file
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Context window for each generation call
    #[serde(default = "default_n_ctx")]
    pub n_ctx: u32,

    /// Batch size for prompt ingestion
    #[serde(default = "default_n_batch")]
    pub n_batch: u32,
}

fn default_model_path() -> String {
    "models/phi-2.Q4_K_M.gguf".to_string()
}

const fn default_n_ctx() -> u32 {
    4096
}

const fn default_n_batch() -> u32 {
    512
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            n_ctx: default_n_ctx(),
            n_batch: default_n_batch(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model_path: std::env::var("GENERATION_MODEL_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.model_path),
            n_ctx: defaults.n_ctx,
            n_batch: defaults.n_batch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.model_path, "models/phi-2.Q4_K_M.gguf");
        assert_eq!(config.n_ctx, 4096);
        assert_eq!(config.n_batch, 512);
    }

    #[test]
    fn deserialization_with_defaults() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.n_ctx, 4096);
    }
}
