use honyaku_core::TokenizeError;
use honyaku_embed::EmbedError;

/// A scoring call that could not produce an honest score
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("Tokenizer failed: {0}")]
    Tokenize(#[from] TokenizeError),

    #[error("Scoring unavailable, embedding failed: {0}")]
    EmbeddingUnavailable(#[from] EmbedError),
}
