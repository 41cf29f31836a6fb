//! LM Studio client (OpenAI-compatible API)

mod client;

pub use client::LmStudioClient;
