use async_trait::async_trait;

use crate::{EmbedError, Embedder, EmbedderMetadata, char_ngrams, l2_normalize, preprocess, stable_hash};

/// Deterministic embedding from hashed character n-grams.
///
/// Needs no model; texts sharing characters and character pairs land close
/// together, which is enough for offline use and tests.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for gram in char_ngrams(&preprocess(text)) {
            let hash = stable_hash(&gram);
            let bucket = (hash % self.dimension as u64) as usize;
            // High bit picks the sign so collisions partly cancel out
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        l2_normalize(&mut vector);
        vector
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn encode(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        Ok(self.embed(text))
    }

    fn metadata(&self) -> EmbedderMetadata {
        EmbedderMetadata {
            name: "hash".to_string(),
            dimension: Some(self.dimension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosine_similarity;

    #[test]
    fn same_text_same_vector() {
        let embedder = HashEmbedder::new(128);
        let a = embedder.embed("人工知能は生活を変えています。");
        let b = embedder.embed("人工知能は生活を変えています。");
        assert_eq!(a, b);
        assert_eq!(a.len(), 128);
    }

    #[test]
    fn similar_text_scores_higher_than_unrelated() {
        let embedder = HashEmbedder::new(256);
        let reference = embedder.embed("機械学習アルゴリズムはパターンを識別できます");
        let close = embedder.embed("機械学習のアルゴリズムはパターンを見つけられます");
        let far = embedder.embed("猫が椅子の下で寝ている");

        let close_sim = cosine_similarity(&reference, &close).unwrap();
        let far_sim = cosine_similarity(&reference, &far).unwrap();
        assert!(close_sim > far_sim, "{close_sim} <= {far_sim}");
    }

    #[test]
    fn particles_only_is_zero_vector() {
        let embedder = HashEmbedder::new(16);
        assert!(embedder.embed("はがを").iter().all(|v| *v == 0.0));
    }

    #[tokio::test]
    async fn encode_matches_embed() {
        let embedder = HashEmbedder::new(32);
        let encoded = embedder.encode("テスト").await.unwrap();
        assert_eq!(encoded, embedder.embed("テスト"));
    }
}
