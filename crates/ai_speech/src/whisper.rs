//! Whisper speech engine implementation

use std::path::Path;

use tracing::{debug, instrument};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use domain::{TranscriptionResult, TranscriptionSegment};

use crate::audio::MODEL_SAMPLE_RATE;
use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;

/// Window used for language detection: the first 30 s at the model rate.
const LANGUAGE_DETECTION_SAMPLES: usize = 30 * MODEL_SAMPLE_RATE as usize;

/// Speech-to-text engine backed by a whisper.cpp model.
///
/// The model weights are loaded once and are read-only afterwards; every
/// call creates its own `WhisperState`, so the engine can be shared across
/// threads without locking.
pub struct WhisperSpeechEngine {
    ctx: WhisperContext,
    config: SpeechConfig,
}

impl std::fmt::Debug for WhisperSpeechEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperSpeechEngine")
            .field("model_path", &self.config.model_path)
            .field("language", &self.config.language)
            .finish_non_exhaustive()
    }
}

impl WhisperSpeechEngine {
    /// Load a GGML model from the configured path.
    #[instrument(skip(config), fields(model_path = %config.model_path))]
    pub fn load(config: SpeechConfig) -> Result<Self, SpeechError> {
        let path = Path::new(&config.model_path);
        if !path.exists() {
            return Err(SpeechError::ModelNotFound(config.model_path.clone()));
        }

        let path_str = path.to_str().ok_or_else(|| {
            SpeechError::ModelNotFound(format!(
                "model path contains non-UTF-8 characters: {}",
                path.display()
            ))
        })?;

        let ctx = WhisperContext::new_with_params(path_str, WhisperContextParameters::default())
            .map_err(|e| SpeechError::ContextInit(e.to_string()))?;

        Ok(Self { ctx, config })
    }

    fn full_params(&self) -> FullParams<'_, '_> {
        let mut fp = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        let lang: Option<&str> = if self.config.language == "auto" {
            None
        } else {
            Some(self.config.language.as_str())
        };
        fp.set_language(lang);
        fp.set_n_threads(self.config.n_threads);
        fp.set_print_progress(false);
        fp.set_print_realtime(false);

        fp
    }

    /// Run a full inference pass and return the finished state.
    fn run(&self, audio: &[f32]) -> Result<whisper_rs::WhisperState, SpeechError> {
        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| SpeechError::ContextInit(e.to_string()))?;

        state
            .full(self.full_params(), audio)
            .map_err(|e| SpeechError::Transcription(e.to_string()))?;

        Ok(state)
    }
}

impl SpeechToText for WhisperSpeechEngine {
    fn transcribe(&self, samples: &[f32]) -> Result<TranscriptionResult, SpeechError> {
        let state = self.run(samples)?;

        let n_segments = state
            .full_n_segments()
            .map_err(|e| SpeechError::Transcription(e.to_string()))?;

        let mut text = String::new();
        let mut segments = Vec::with_capacity(usize::try_from(n_segments).unwrap_or(0));

        for i in 0..n_segments {
            let seg_text = state
                .full_get_segment_text(i)
                .map_err(|e| SpeechError::Transcription(format!("segment {i}: {e}")))?;

            // Timestamps are centiseconds
            #[allow(clippy::cast_precision_loss)]
            let start = state.full_get_segment_t0(i).unwrap_or(0).max(0) as f32 / 100.0;
            #[allow(clippy::cast_precision_loss)]
            let end = state.full_get_segment_t1(i).unwrap_or(0).max(0) as f32 / 100.0;

            let confidence = segment_confidence(&state, i)?;

            text.push_str(&seg_text);
            segments.push(TranscriptionSegment {
                text: seg_text,
                start,
                end,
                confidence,
            });
        }

        let language = detected_language(&state);

        debug!(
            segments = segments.len(),
            language = %language,
            "Transcription completed"
        );

        Ok(TranscriptionResult::from_segments(
            text.trim(),
            language,
            segments,
        ))
    }

    fn detect_language(&self, samples: &[f32]) -> Result<String, SpeechError> {
        let window = &samples[..samples.len().min(LANGUAGE_DETECTION_SAMPLES)];
        let state = self.run(window)?;
        Ok(detected_language(&state))
    }
}

/// Mean token probability of a segment; 1.0 for a token-less segment.
fn segment_confidence(
    state: &whisper_rs::WhisperState,
    segment: i32,
) -> Result<f32, SpeechError> {
    let n_tokens = state
        .full_n_tokens(segment)
        .map_err(|e| SpeechError::Transcription(e.to_string()))?;

    if n_tokens == 0 {
        return Ok(1.0);
    }

    let mut sum = 0.0_f32;
    for j in 0..n_tokens {
        sum += state
            .full_get_token_prob(segment, j)
            .map_err(|e| SpeechError::Transcription(e.to_string()))?;
    }

    #[allow(clippy::cast_precision_loss)]
    Ok(sum / n_tokens as f32)
}

/// Language tag of a finished inference pass.
fn detected_language(state: &whisper_rs::WhisperState) -> String {
    state
        .full_lang_id_from_state()
        .ok()
        .and_then(whisper_rs::get_lang_str)
        .unwrap_or("unknown")
        .to_string()
}
