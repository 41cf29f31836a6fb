//! Port definitions for the chat-completion upstream
//!
//! One async call signature per capability, so the call path can be tested
//! with a stub standing in for the network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CompletionError;

/// One entry of the upstream's model listing.
///
/// LM Studio reports only `id` for loaded models; `parameters` and
/// `context_length` appear on servers that publish them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u32>,
}

/// Port for chat-completion implementations
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Send a single-user-message completion request and return the
    /// assistant text verbatim.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// List the models the upstream currently serves.
    async fn list_models(&self) -> Result<Vec<ModelEntry>, CompletionError>;
}
