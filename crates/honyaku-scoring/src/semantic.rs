use honyaku_embed::{EmbedError, Embedder, cosine_similarity};

/// Cosine similarity of the two texts' embeddings, in [-1, 1]
pub async fn semantic_similarity(
    embedder: &dyn Embedder,
    candidate: &str,
    reference: &str,
) -> Result<f64, EmbedError> {
    let candidate_vec = embedder.encode(candidate).await?;
    let reference_vec = embedder.encode(reference).await?;
    cosine_similarity(&candidate_vec, &reference_vec)
}

#[cfg(test)]
mod tests {
    use honyaku_embed::HashEmbedder;

    use super::*;

    #[tokio::test]
    async fn self_similarity_is_one() {
        let embedder = HashEmbedder::new(64);
        let text = "人工知能は私たちの生活を変えています。";
        assert_eq!(semantic_similarity(&embedder, text, text).await.unwrap(), 1.0);
    }

    #[tokio::test]
    async fn unrelated_texts_score_lower() {
        let embedder = HashEmbedder::new(256);
        let close = semantic_similarity(&embedder, "猫が寝ている。", "猫が寝ていた。").await.unwrap();
        let far = semantic_similarity(&embedder, "猫が寝ている。", "量子コンピュータ").await.unwrap();
        assert!(close > far);
        assert!((-1.0..=1.0).contains(&far));
    }
}
