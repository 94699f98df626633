use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const SOURCE_KEY: &str = "source";

/// A stored corpus document without its embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata: Map::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.metadata
            .insert(SOURCE_KEY.to_string(), Value::String(source.into()));
        self
    }

    /// `metadata.source`, or "Unknown"
    pub fn source(&self) -> String {
        self.metadata
            .get(SOURCE_KEY)
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string()
    }
}

/// Read access to the question corpus
pub trait Corpus: Send + Sync {
    /// Every document, in storage order
    fn all_documents(&self) -> Vec<Document>;
}

impl Corpus for Vec<Document> {
    fn all_documents(&self) -> Vec<Document> {
        self.clone()
    }
}
