//! AI Generation - local causal language model
//!
//! Wraps a GGUF model loaded through llama.cpp. The model is loaded once at
//! process start; each generation call runs in a fresh context with
//! sampling-based decoding.

pub mod config;
pub mod error;
pub mod llama;
pub mod ports;

pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use llama::LlamaGenerator;
pub use ports::TextGeneration;
