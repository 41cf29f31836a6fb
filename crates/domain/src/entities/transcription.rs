//! Transcription entities

use serde::{Deserialize, Serialize};

/// A time-bounded slice of a transcription with its own confidence score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionSegment {
    pub text: String,
    /// Segment start in seconds
    pub start: f32,
    /// Segment end in seconds
    pub end: f32,
    pub confidence: f32,
}

/// Full transcription of one uploaded audio file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    /// Detected language tag (ISO 639-1)
    pub language: String,
    /// Arithmetic mean of segment confidences, 1.0 when there are none
    pub confidence: f32,
    pub segments: Vec<TranscriptionSegment>,
}

impl TranscriptionResult {
    /// Assemble a result, deriving the overall confidence from the segments.
    pub fn from_segments(
        text: impl Into<String>,
        language: impl Into<String>,
        segments: Vec<TranscriptionSegment>,
    ) -> Self {
        let confidence = overall_confidence(&segments);
        Self {
            text: text.into(),
            language: language.into(),
            confidence,
            segments,
        }
    }
}

/// Mean of the segment confidences; 1.0 for an empty segment list.
pub fn overall_confidence(segments: &[TranscriptionSegment]) -> f32 {
    if segments.is_empty() {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = segments.len() as f32;
    segments.iter().map(|s| s.confidence).sum::<f32>() / count
}
