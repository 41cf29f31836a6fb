//! Port definition for text generation
//!
//! Object-safe and `Send + Sync` so the engine can be held behind an
//! `Arc<dyn TextGeneration>` and stubbed in handler tests.

use domain::{GenerationParams, GenerationResult};

use crate::error::GenerationError;

/// Port for sampling-based text generation.
///
/// Implementations are synchronous; callers move the work off the async
/// runtime themselves.
pub trait TextGeneration: Send + Sync {
    /// Generate a continuation for `prompt` with the given decoding knobs.
    ///
    /// The returned text contains only the continuation, never the echoed
    /// prompt, and the usage total is the sum of its parts.
    fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, GenerationError>;
}
