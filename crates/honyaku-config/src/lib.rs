use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::embedding::EmbeddingConfig;
use self::quiz::QuizConfig;
use self::scoring::ScoringConfig;
use self::store::StoreConfig;

pub mod embedding;
pub mod quiz;
pub mod scoring;
pub mod store;

pub use embedding::EmbeddingBackend;

const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub embedding: EmbeddingConfig,
    pub scoring: ScoringConfig,
    pub quiz: QuizConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Load a JSON profile; missing sections fall back to defaults
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.store.apply_env();
        self.embedding.apply_env();
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = &self.scoring.weights;
        if [weights.vector, weights.word, weights.string]
            .iter()
            .any(|w| *w < 0.0)
        {
            return Err(ConfigError::Invalid(
                "scoring weights must not be negative".to_string(),
            ));
        }
        if (weights.sum() - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigError::Invalid(format!(
                "scoring weights must sum to 1.0, got {}",
                weights.sum()
            )));
        }

        if self.quiz.min_sentence_chars > self.quiz.max_sentence_chars {
            return Err(ConfigError::Invalid(format!(
                "min_sentence_chars ({}) exceeds max_sentence_chars ({})",
                self.quiz.min_sentence_chars, self.quiz.max_sentence_chars
            )));
        }

        if self.embedding.dimension == 0 {
            return Err(ConfigError::Invalid(
                "embedding dimension must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.weights.vector, 0.40);
        assert_eq!(config.scoring.weights.word, 0.40);
        assert_eq!(config.scoring.weights.string, 0.20);
        assert_eq!(config.quiz.min_sentence_chars, 50);
        assert_eq!(config.quiz.max_sentence_chars, 200);
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let mut config = Config::default();
        config.scoring.weights.string = 0.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_inverted_sentence_bounds() {
        let mut config = Config::default();
        config.quiz.min_sentence_chars = 300;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_profile_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "embedding": {{ "backend": "tfidf" }} }}"#).unwrap();

        let config: Config =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(config.embedding.backend, EmbeddingBackend::Tfidf);
        assert_eq!(config.embedding.dimension, 256);
        assert_eq!(config.quiz.max_sentence_chars, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn backend_names_parse() {
        assert_eq!(EmbeddingBackend::parse("HASH"), Some(EmbeddingBackend::Hash));
        assert_eq!(EmbeddingBackend::parse("tf-idf"), Some(EmbeddingBackend::Tfidf));
        assert_eq!(EmbeddingBackend::parse("http"), Some(EmbeddingBackend::Remote));
        assert_eq!(EmbeddingBackend::parse("bert"), None);
    }
}
