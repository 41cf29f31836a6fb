//! Transcription and language-detection handlers

use axum::{Json, extract::Multipart, extract::State};
use domain::TranscriptionResult;
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::SpeechState};

/// Language detection response body
#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub language: String,
}

/// Pull the uploaded audio bytes out of the multipart body.
///
/// The `audio` field is expected, but any field carrying a filename is
/// accepted; the bytes go to the decoder untouched.
async fn read_audio_upload(mut multipart: Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let is_audio = field.name() == Some("audio") || field.file_name().is_some();
        if !is_audio {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {e}")))?;
        return Ok(bytes.to_vec());
    }

    Err(ApiError::BadRequest("missing audio file".to_string()))
}

/// Transcribe an uploaded audio file
#[instrument(skip(state, multipart))]
pub async fn transcribe(
    State(state): State<SpeechState>,
    multipart: Multipart,
) -> Result<Json<TranscriptionResult>, ApiError> {
    let data = read_audio_upload(multipart).await?;

    let speech = state.speech.clone();
    // Decode and inference are synchronous; keep them off the async runtime.
    let result = tokio::task::spawn_blocking(move || {
        let waveform = ai_speech::audio::decode_to_mono_16k(&data)?;
        speech.transcribe(&waveform)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(result))
}

/// Detect the spoken language of an uploaded audio file
#[instrument(skip(state, multipart))]
pub async fn detect_language(
    State(state): State<SpeechState>,
    multipart: Multipart,
) -> Result<Json<LanguageResponse>, ApiError> {
    let data = read_audio_upload(multipart).await?;

    let speech = state.speech.clone();
    let language = tokio::task::spawn_blocking(move || {
        let waveform = ai_speech::audio::decode_to_mono_16k(&data)?;
        speech.detect_language(&waveform)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(LanguageResponse { language }))
}
