//! Writing sample and analysis entities
//!
//! The analysis shape mirrors the JSON the upstream model is instructed to
//! emit. Scores are required; the correction/suggestion list elements are
//! parsed leniently because the model occasionally omits fields.

use serde::{Deserialize, Serialize};

use super::chat::default_level;

/// A piece of student writing submitted for analysis or improvement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WritingSample {
    /// Raw text to analyze or improve
    pub text: String,
    /// Proficiency level tag
    #[serde(default = "default_level")]
    pub level: String,
}

impl WritingSample {
    /// Create a sample with the default proficiency level
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: default_level(),
        }
    }
}

/// Structured result of a writing analysis.
///
/// All four scores are in `[0, 100]`; the range is promised by the prompt,
/// not revalidated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingAnalysis {
    pub grammar_score: f64,
    pub vocabulary_score: f64,
    pub coherence_score: f64,
    pub overall_score: f64,
    #[serde(default)]
    pub corrections: Vec<Correction>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    pub feedback: String,
}

/// A single correction proposed by the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Correction {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub severity: String,
}

/// A free-form improvement suggestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub text: String,
}
