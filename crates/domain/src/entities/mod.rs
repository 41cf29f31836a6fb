//! Domain entities

pub mod chat;
pub mod generation;
pub mod transcription;
pub mod writing;

pub use chat::ChatExchange;
pub use generation::{GenerationParams, GenerationResult, TokenUsage};
pub use transcription::{TranscriptionResult, TranscriptionSegment};
pub use writing::{Correction, Suggestion, WritingAnalysis, WritingSample};
