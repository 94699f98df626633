/// Morphological analysis interface for language implementations
pub trait Tokenizer: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ja", "zh", "ko", etc.)
    fn language_code(&self) -> &str;

    /// Split text into tokens, in surface order
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    /// Coarse part of speech (名詞, 動詞, 助詞, ...)
    pub coarse_pos: String,
    /// Finer-grained features, coarse tag first
    pub features: Vec<String>,
}

impl Token {
    pub fn new(surface: impl Into<String>, coarse_pos: &str, detail: &[&str]) -> Self {
        let mut features = Vec::with_capacity(detail.len() + 1);
        features.push(coarse_pos.to_string());
        features.extend(detail.iter().map(|d| d.to_string()));

        Self {
            surface: surface.into(),
            coarse_pos: coarse_pos.to_string(),
            features,
        }
    }

    /// Surface length in characters
    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("Tokenizer unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
