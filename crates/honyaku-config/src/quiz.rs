use serde::{Deserialize, Serialize};

fn default_min_sentence_chars() -> usize {
    50
}

fn default_max_sentence_chars() -> usize {
    200
}

fn default_min_ascii_ratio() -> f64 {
    0.7
}

/// Bounds for English sentences pulled out of prose documents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,
    #[serde(default = "default_max_sentence_chars")]
    pub max_sentence_chars: usize,
    /// Sentences must have strictly more ASCII than this fraction
    #[serde(default = "default_min_ascii_ratio")]
    pub min_ascii_ratio: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: default_min_sentence_chars(),
            max_sentence_chars: default_max_sentence_chars(),
            min_ascii_ratio: default_min_ascii_ratio(),
        }
    }
}
