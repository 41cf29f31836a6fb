//! LinguaTutor HTTP presentation layer
//!
//! This crate provides the HTTP API for the three LinguaTutor services:
//! the chat/writing gateway, the generation service, and the transcription
//! service. Each service is an independent binary sharing the handler code
//! here.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{gateway_router, generation_router, speech_router};
pub use state::{GatewayState, GenerationState, SpeechState};
