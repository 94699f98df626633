use std::sync::Arc;

use honyaku_config::EmbeddingBackend;
use honyaku_config::embedding::EmbeddingConfig;
use unicode_normalization::UnicodeNormalization;

mod hash;
mod remote;
mod tfidf;

pub use hash::HashEmbedder;
pub use remote::RemoteEmbedder;
pub use tfidf::TfIdfEmbedder;

/// Text embedding provider interface
#[async_trait::async_trait]
pub trait Embedder: Send + Sync {
    /// Encode text into a fixed-length vector.
    ///
    /// Must be deterministic for identical input within a process.
    async fn encode(&self, text: &str) -> Result<Vec<f32>, EmbedError>;

    /// Provider metadata
    fn metadata(&self) -> EmbedderMetadata;
}

#[derive(Debug, Clone)]
pub struct EmbedderMetadata {
    pub name: String,
    /// Vector length, if known before the first call
    pub dimension: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

/// Function words removed before encoding
const STRIPPED_PARTICLES: [&str; 10] = ["は", "が", "を", "に", "へ", "と", "から", "まで", "で", "の"];

/// Shared input cleanup for every backend.
///
/// Replaces common particles with spaces, collapses whitespace and applies
/// NFKC so full-width Latin matches half-width.
pub fn preprocess(text: &str) -> String {
    let mut text = text.to_string();
    for particle in STRIPPED_PARTICLES {
        text = text.replace(particle, " ");
    }

    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .nfkc()
        .collect()
}

/// Cosine similarity; 0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, EmbedError> {
    if a.len() != b.len() {
        return Err(EmbedError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    // sqrt of the product keeps self-similarity at exactly 1.0
    Ok((dot / (norm_a * norm_b).sqrt()).clamp(-1.0, 1.0))
}

/// Build the backend selected by configuration.
///
/// `corpus` seeds document frequencies for the TF-IDF backend and is ignored
/// by the others.
pub fn build_embedder(config: &EmbeddingConfig, corpus: &[String]) -> Arc<dyn Embedder> {
    match config.backend {
        EmbeddingBackend::Hash => {
            tracing::info!("Using hash embeddings (dimension {})", config.dimension);
            Arc::new(HashEmbedder::new(config.dimension))
        }
        EmbeddingBackend::Tfidf => {
            tracing::info!("Fitting TF-IDF embeddings on {} documents", corpus.len());
            Arc::new(TfIdfEmbedder::fit(config.dimension, corpus))
        }
        EmbeddingBackend::Remote => {
            tracing::info!("Using remote embeddings: {} ({})", config.model, config.api_url);
            Arc::new(RemoteEmbedder::new(
                config.api_url.clone(),
                config.api_key.clone(),
                config.model.clone(),
            ))
        }
    }
}

/// FNV-1a, stable across runs and toolchains
pub(crate) fn stable_hash(feature: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    feature.bytes().fold(OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}

/// Character unigrams and bigrams of already preprocessed text
pub(crate) fn char_ngrams(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut grams: Vec<String> = chars.iter().map(|c| c.to_string()).collect();
    grams.extend(chars.windows(2).map(|w| w.iter().collect::<String>()));
    grams
}

pub(crate) fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        vector.iter_mut().for_each(|v| *v /= norm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_of_self_is_one() {
        let v = [0.3f32, -1.7, 2.25, 0.001];
        assert_eq!(cosine_similarity(&v, &v).unwrap(), 1.0);
    }

    #[test]
    fn cosine_zero_norm_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap(), 0.0);
    }

    #[test]
    fn cosine_opposite_is_negative() {
        let sim = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap();
        assert_eq!(sim, -1.0);
    }

    #[test]
    fn cosine_dimension_mismatch_errors() {
        assert!(matches!(
            cosine_similarity(&[1.0], &[1.0, 2.0]),
            Err(EmbedError::DimensionMismatch { left: 1, right: 2 })
        ));
    }

    #[test]
    fn preprocess_strips_particles() {
        assert_eq!(preprocess("猫が机の上で寝ている"), "猫 机 上 寝ている");
        assert_eq!(preprocess("ＡＩから"), "AI");
    }
}
