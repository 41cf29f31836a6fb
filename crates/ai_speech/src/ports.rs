//! Port definition for speech-to-text
//!
//! Object-safe and `Send + Sync` so the engine can be held behind an
//! `Arc<dyn SpeechToText>` and stubbed in handler tests.

use domain::TranscriptionResult;

use crate::error::SpeechError;

/// Port for speech-to-text engines.
///
/// # Contract
///
/// Both methods take 16 kHz mono `f32` PCM samples (see
/// [`crate::audio::decode_to_mono_16k`]). Implementations are synchronous;
/// callers move the work off the async runtime themselves.
pub trait SpeechToText: Send + Sync {
    /// Transcribe the waveform into text with per-segment timing.
    fn transcribe(&self, samples: &[f32]) -> Result<TranscriptionResult, SpeechError>;

    /// Detect the spoken language from the start of the waveform.
    fn detect_language(&self, samples: &[f32]) -> Result<String, SpeechError>;
}
