use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

/// Parameters of one generation call. Shared read-only across a batch.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub source_excerpt: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        subject: impl Into<String>,
        topic: impl Into<String>,
        difficulty: Difficulty,
        source_excerpt: Option<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            topic: topic.into(),
            difficulty,
            source_excerpt: source_excerpt.filter(|s| !s.trim().is_empty()),
        }
    }
}
