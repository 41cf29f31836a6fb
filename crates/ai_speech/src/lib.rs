//! AI Speech - local speech-to-text
//!
//! Decodes uploaded audio bytes into a 16 kHz mono waveform and runs a
//! locally loaded Whisper model over it.
//!
//! # Architecture
//!
//! - `audio` - byte decoding, downmixing and resampling
//! - `ports` - the `SpeechToText` trait handlers depend on
//! - `whisper` - the whisper.cpp adapter

pub mod audio;
pub mod config;
pub mod error;
pub mod ports;
pub mod whisper;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::SpeechToText;
pub use whisper::WhisperSpeechEngine;
