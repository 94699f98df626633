use std::env;

use serde::{Deserialize, Serialize};

fn default_backend() -> EmbeddingBackend {
    EmbeddingBackend::Hash
}

fn default_dimension() -> usize {
    256
}

fn default_api_url() -> String {
    "http://localhost:8080/v1/embeddings".to_string()
}

fn default_model() -> String {
    "pkshatech/GLuCoSE-base-ja".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    /// Hashed character n-grams, no model required
    Hash,
    /// Character-bigram TF-IDF fitted on the corpus
    Tfidf,
    /// Sentence-embedding model behind an HTTP endpoint
    Remote,
}

impl EmbeddingBackend {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hash" => Some(EmbeddingBackend::Hash),
            "tfidf" | "tf-idf" => Some(EmbeddingBackend::Tfidf),
            "remote" | "http" => Some(EmbeddingBackend::Remote),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    #[serde(default = "default_backend")]
    pub backend: EmbeddingBackend,
    /// Vector length for the hash backend
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            dimension: default_dimension(),
            api_url: default_api_url(),
            api_key: String::new(),
            model: default_model(),
        }
    }
}

impl EmbeddingConfig {
    /// Apply `HONYAKU_EMBEDDING_*` environment overrides
    pub fn apply_env(&mut self) {
        if let Some(backend) = env::var("HONYAKU_EMBEDDING_BACKEND")
            .ok()
            .and_then(|v| EmbeddingBackend::parse(&v))
        {
            self.backend = backend;
        }

        if let Some(dimension) = env::var("HONYAKU_EMBEDDING_DIMENSION")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.dimension = dimension;
        }

        if let Ok(url) = env::var("HONYAKU_EMBEDDING_URL") {
            self.api_url = url;
        }

        if let Ok(key) = env::var("HONYAKU_EMBEDDING_API_KEY") {
            self.api_key = key;
        }

        if let Ok(model) = env::var("HONYAKU_EMBEDDING_MODEL") {
            self.model = model;
        }
    }
}
