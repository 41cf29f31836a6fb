//! Tutor service - chat, writing analysis and model info
//!
//! Each operation is a single stateless request/response cycle: build the
//! fixed prompt, forward it to the upstream, reshape the answer.

use std::{fmt, sync::Arc};

use ai_core::{ChatCompletion, CompletionConfig, CompletionError};
use domain::{ChatExchange, WritingAnalysis, WritingSample};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, prompts};

/// Description of the model currently served by the upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    pub context_length: u32,
}

impl ModelInfo {
    /// The fixed record reported when the upstream lists nothing usable.
    fn unknown(context_length: u32) -> Self {
        Self {
            name: "LM Studio Model".to_string(),
            kind: "Unknown".to_string(),
            parameters: None,
            context_length,
        }
    }
}

/// Service for the chat/writing gateway.
pub struct TutorService {
    completion: Arc<dyn ChatCompletion>,
    config: CompletionConfig,
}

impl fmt::Debug for TutorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TutorService")
            .field("provider", &self.config.provider)
            .finish_non_exhaustive()
    }
}

impl TutorService {
    /// Create a new tutor service
    pub fn new(completion: Arc<dyn ChatCompletion>, config: CompletionConfig) -> Self {
        Self { completion, config }
    }

    /// Handle a single chat turn and return the upstream text verbatim.
    ///
    /// The provider gate only applies here; the writing endpoints always
    /// reach the configured upstream.
    #[instrument(skip(self, exchange), fields(message_len = exchange.message.len(), level = %exchange.level))]
    pub async fn chat(&self, exchange: &ChatExchange) -> Result<String, ApplicationError> {
        if self.config.provider != "lmstudio" {
            return Err(ApplicationError::UnsupportedProvider(
                self.config.provider.clone(),
            ));
        }

        let prompt = prompts::chat_prompt(
            &exchange.level,
            &exchange.previous_messages,
            &exchange.message,
        );

        let response = self.completion.complete(&prompt).await?;

        debug!(response_len = response.len(), "Chat response received");

        Ok(response)
    }

    /// Analyze a writing sample into the structured result.
    #[instrument(skip(self, sample), fields(text_len = sample.text.len(), level = %sample.level))]
    pub async fn analyze_writing(
        &self,
        sample: &WritingSample,
    ) -> Result<WritingAnalysis, ApplicationError> {
        let prompt = prompts::analysis_prompt(&sample.level, &sample.text);

        let response = self.completion.complete(&prompt).await?;

        serde_json::from_str(&response).map_err(|e| {
            warn!(error = %e, "Model output was not the demanded JSON shape");
            ApplicationError::MalformedModelOutput
        })
    }

    /// Improve a writing sample; the upstream free-text response is the result.
    #[instrument(skip(self, sample), fields(text_len = sample.text.len(), level = %sample.level))]
    pub async fn improve_writing(
        &self,
        sample: &WritingSample,
    ) -> Result<String, ApplicationError> {
        let prompt = prompts::improvement_prompt(&sample.level, &sample.text);

        self.completion
            .complete(&prompt)
            .await
            .map_err(ApplicationError::from)
    }

    /// Report the model the upstream currently serves.
    ///
    /// A non-success status or an empty listing falls back to the fixed
    /// default record; only transport errors reach the caller.
    #[instrument(skip(self))]
    pub async fn model_info(&self) -> Result<ModelInfo, ApplicationError> {
        let entries = match self.completion.list_models().await {
            Ok(entries) => entries,
            Err(CompletionError::ServerError(msg)) => {
                debug!(%msg, "Model listing unavailable, using default record");
                return Ok(ModelInfo::unknown(self.config.context_length));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(entries.into_iter().next().map_or_else(
            || ModelInfo::unknown(self.config.context_length),
            |entry| ModelInfo {
                name: entry.id,
                kind: "LM Studio Model".to_string(),
                parameters: entry.parameters.or_else(|| Some("Unknown".to_string())),
                context_length: entry.context_length.unwrap_or(self.config.context_length),
            },
        ))
    }
}
