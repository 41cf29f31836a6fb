//! Application layer for LinguaTutor
//!
//! Hosts the gateway's tutoring logic: fixed bilingual prompt templates and
//! the reshaping of upstream completions into typed results. All model
//! intelligence is delegated to the upstream behind `ai_core`'s port.

pub mod error;
pub mod prompts;
pub mod services;

pub use error::ApplicationError;
pub use services::{ModelInfo, TutorService};
