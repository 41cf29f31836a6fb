//! AI Core - upstream chat-completion client
//!
//! Provides the abstraction over the externally configured chat-completion
//! server (LM Studio by default), which exposes an OpenAI-compatible API.

pub mod config;
pub mod error;
pub mod lmstudio;
pub mod ports;

pub use config::CompletionConfig;
pub use error::CompletionError;
pub use lmstudio::LmStudioClient;
pub use ports::{ChatCompletion, ModelEntry};
