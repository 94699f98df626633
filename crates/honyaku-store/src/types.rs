use honyaku_core::Document;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// On-disk record: a document plus its embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub embedding: Vec<f32>,
}

impl StoredDocument {
    pub fn to_document(&self) -> Document {
        Document {
            id: self.id.clone(),
            text: self.text.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub document: Document,
    /// 1 - cosine similarity; smaller is closer
    pub distance: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid store file {path}: {source}")]
    InvalidFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialize error: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("Embedding failed: {0}")]
    EmbedError(#[from] honyaku_embed::EmbedError),
}
