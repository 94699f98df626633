use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{EmbedError, Embedder, EmbedderMetadata, preprocess};

/// Sentence-embedding model served over an OpenAI-compatible
/// `/embeddings` endpoint
#[derive(Clone)]
pub struct RemoteEmbedder {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl RemoteEmbedder {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[async_trait]
impl Embedder for RemoteEmbedder {
    async fn encode(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let processed = preprocess(text);
        let request = EmbeddingRequest {
            model: &self.model,
            input: [&processed],
        };

        let mut builder = self.client.post(&self.api_url).json(&request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder.send().await?;

        if response.status() == 429 {
            return Err(EmbedError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(EmbedError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(EmbedError::ApiError(format!("HTTP {}", response.status())));
        }

        let body: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbedError::ApiError(format!("Failed to parse response: {}", e)))?;

        let embedding = body
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbedError::ApiError("No embedding in response".to_string()))?;

        if embedding.is_empty() || embedding.iter().any(|v| !v.is_finite()) {
            return Err(EmbedError::ApiError(
                "Embedding is empty or contains non-finite values".to_string(),
            ));
        }

        tracing::debug!("Encoded {} chars into {} dims", text.chars().count(), embedding.len());
        Ok(embedding)
    }

    fn metadata(&self) -> EmbedderMetadata {
        EmbedderMetadata {
            name: format!("remote:{}", self.model),
            dimension: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_fails_loudly() {
        let embedder = RemoteEmbedder::new(
            "http://127.0.0.1:9/v1/embeddings".to_string(),
            String::new(),
            "test-model".to_string(),
        );
        assert!(embedder.encode("テスト").await.is_err());
    }

    #[test]
    fn request_shape() {
        let request = EmbeddingRequest {
            model: "m",
            input: ["猫"],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "model": "m", "input": ["猫"] }));
    }
}
