//! LM Studio client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::CompletionConfig;
use crate::error::CompletionError;
use crate::ports::{ChatCompletion, ModelEntry};

/// Chat-completion client for an LM Studio server (OpenAI-compatible API).
pub struct LmStudioClient {
    client: Client,
    config: CompletionConfig,
}

impl std::fmt::Debug for LmStudioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LmStudioClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl LmStudioClient {
    /// Create a new client from configuration.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| CompletionError::ConnectionFailed(e.to_string()))?;

        info!(base_url = %config.base_url, "Initialized LM Studio client");

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

/// OpenAI-format chat request
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

/// OpenAI-format chat response
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// OpenAI-format model listing
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Vec<ModelEntry>,
}

#[async_trait]
impl ChatCompletion for LmStudioClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            messages: vec![WireMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
        };

        debug!("Sending chat-completion request");

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Completion request failed");
            return Err(CompletionError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::InvalidResponse("no choices in response".into()))?;

        debug!("Completion received");

        Ok(choice.message.content)
    }

    #[instrument(skip(self))]
    async fn list_models(&self) -> Result<Vec<ModelEntry>, CompletionError> {
        let response = self.client.get(self.api_url("models")).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let models: ModelsResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        Ok(models.data)
    }
}
