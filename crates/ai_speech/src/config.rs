//! Configuration for speech processing

use serde::{Deserialize, Serialize};

/// Configuration for the Whisper speech engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Path to the GGML model file
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// ISO 639-1 language code, or `auto` to let the model detect it
    #[serde(default = "default_language")]
    pub language: String,

    /// CPU threads handed to the model
    #[serde(default = "default_threads")]
    pub n_threads: i32,
}

fn default_model_path() -> String {
    "models/ggml-base.bin".to_string()
}

fn default_language() -> String {
    "auto".to_string()
}

/// Physical threads capped at 8; Whisper sees diminishing returns beyond.
fn default_threads() -> i32 {
    std::thread::available_parallelism()
        .map(|n| i32::try_from(n.get().min(8)).unwrap_or(4))
        .unwrap_or(4)
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            language: default_language(),
            n_threads: default_threads(),
        }
    }
}

impl SpeechConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model_path: std::env::var("WHISPER_MODEL_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.model_path),
            language: std::env::var("WHISPER_LANGUAGE")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.language),
            n_threads: defaults.n_threads,
        }
    }
}
