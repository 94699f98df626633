use async_trait::async_trait;

use crate::{EmbedError, Embedder, EmbedderMetadata, char_ngrams, l2_normalize, preprocess, stable_hash};

/// TF-IDF over hashed character n-grams.
///
/// Document frequencies are counted per hash bucket at fit time, so the
/// vector length stays fixed and unseen n-grams still encode.
#[derive(Debug, Clone)]
pub struct TfIdfEmbedder {
    idf: Vec<f32>,
    documents: usize,
}

impl TfIdfEmbedder {
    pub fn fit(dimension: usize, corpus: &[String]) -> Self {
        let dimension = dimension.max(1);
        let mut document_frequency = vec![0usize; dimension];

        for text in corpus {
            let mut seen = vec![false; dimension];
            for gram in char_ngrams(&preprocess(text)) {
                seen[bucket(&gram, dimension)] = true;
            }
            for (df, present) in document_frequency.iter_mut().zip(seen) {
                if present {
                    *df += 1;
                }
            }
        }

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1
        let n = corpus.len() as f32;
        let idf = document_frequency
            .iter()
            .map(|df| ((1.0 + n) / (1.0 + *df as f32)).ln() + 1.0)
            .collect();

        tracing::debug!("TF-IDF fitted: {} documents, {} buckets", corpus.len(), dimension);

        Self {
            idf,
            documents: corpus.len(),
        }
    }

    pub fn document_count(&self) -> usize {
        self.documents
    }

    pub fn embed(&self, text: &str) -> Vec<f32> {
        let dimension = self.idf.len();
        let mut vector = vec![0.0f32; dimension];

        for gram in char_ngrams(&preprocess(text)) {
            vector[bucket(&gram, dimension)] += 1.0;
        }
        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        l2_normalize(&mut vector);
        vector
    }
}

fn bucket(gram: &str, dimension: usize) -> usize {
    (stable_hash(gram) % dimension as u64) as usize
}

#[async_trait]
impl Embedder for TfIdfEmbedder {
    async fn encode(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        Ok(self.embed(text))
    }

    fn metadata(&self) -> EmbedderMetadata {
        EmbedderMetadata {
            name: "tfidf".to_string(),
            dimension: Some(self.idf.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosine_similarity;

    fn corpus() -> Vec<String> {
        [
            "EN: Artificial intelligence is transforming the way we live and work.\nJP: 人工知能は私たちの生活と仕事のあり方を変えています。",
            "EN: Robotics combines mechanical engineering with artificial intelligence.\nJP: ロボット工学は機械工学と人工知能を組み合わせたものです。",
            "EN: Automation reduces manual tasks.\nJP: 自動化は手動タスクを削減します。",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn empty_corpus_still_encodes() {
        let embedder = TfIdfEmbedder::fit(64, &[]);
        let v = embedder.embed("人工知能");
        assert_eq!(v.len(), 64);
        assert!(v.iter().any(|x| *x != 0.0));
    }

    #[test]
    fn self_similarity_is_one() {
        let embedder = TfIdfEmbedder::fit(128, &corpus());
        let v = embedder.embed("自動化は手動タスクを削減します。");
        assert_eq!(cosine_similarity(&v, &v).unwrap(), 1.0);
        assert_eq!(embedder.document_count(), 3);
    }

    #[test]
    fn related_sentence_ranks_above_unrelated() {
        let embedder = TfIdfEmbedder::fit(256, &corpus());
        let reference = embedder.embed("自動化は手動タスクを削減します。");
        let close = embedder.embed("自動化で手動のタスクが減ります。");
        let far = embedder.embed("ロボット工学と人工知能");

        assert!(
            cosine_similarity(&reference, &close).unwrap()
                > cosine_similarity(&reference, &far).unwrap()
        );
    }
}
