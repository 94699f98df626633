use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use honyaku_core::{Token, TokenizeError, Tokenizer};
use honyaku_embed::{EmbedError, Embedder, EmbedderMetadata};

/// Splits on whitespace, every word a plain noun
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn language_code(&self) -> &str {
        "test"
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        Ok(text
            .split_whitespace()
            .map(|w| Token::new(w, "名詞", &["一般"]))
            .collect())
    }
}

/// Fixed vectors per text, counting calls
#[derive(Default)]
pub struct TableEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    calls: AtomicUsize,
}

impl TableEmbedder {
    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Embedder for TableEmbedder {
    async fn encode(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| EmbedError::ApiError(format!("no vector for {text}")))
    }

    fn metadata(&self) -> EmbedderMetadata {
        EmbedderMetadata {
            name: "table".to_string(),
            dimension: None,
        }
    }
}

pub fn japanese() -> Arc<dyn Tokenizer> {
    Arc::new(honyaku_lang_japanese::JapaneseTokenizer::new())
}
