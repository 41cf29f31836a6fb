//! Application services

pub mod tutor_service;

pub use tutor_service::{ModelInfo, TutorService};
