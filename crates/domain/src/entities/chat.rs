//! Chat exchange entity

use serde::{Deserialize, Serialize};

/// A single stateless chat turn submitted by a student.
///
/// `previous_messages` is opaque to the service: the turns are echoed into
/// the tutoring prompt verbatim and never interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    /// The student's message
    pub message: String,
    /// Proficiency level tag steering response difficulty
    #[serde(default = "default_level")]
    pub level: String,
    /// Prior turns of the conversation, oldest first
    #[serde(default)]
    pub previous_messages: Vec<String>,
}

pub(crate) fn default_level() -> String {
    "intermediate".to_string()
}

impl ChatExchange {
    /// Create an exchange with the default proficiency level and no history
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: default_level(),
            previous_messages: Vec::new(),
        }
    }

    /// Set the proficiency level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the conversation history
    pub fn with_history(mut self, previous: Vec<String>) -> Self {
        self.previous_messages = previous;
        self
    }
}
