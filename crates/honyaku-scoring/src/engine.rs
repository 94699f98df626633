use std::sync::Arc;

use honyaku_core::{Corpus, Tokenizer};
use honyaku_embed::Embedder;
use honyaku_types::{Grade, ScoreResult, ScoringTrace, SentencePair, Weights};

use crate::error::ScoringError;
use crate::overlap::word_overlap;
use crate::question::{TaggedText, parse_tagged_text};
use crate::semantic::semantic_similarity;
use crate::similarity::{StringSimilarity, string_similarity};

/// Feedback when the learner submitted nothing
pub const EMPTY_ANSWER_FEEDBACK: &str = "回答が入力されていません。";

/// Common words shown in the trace before the rest is summarized
const COMMON_WORDS_PREVIEW: usize = 15;

/// Combines word overlap, embedding similarity and character similarity
/// into a 0–100 score.
pub struct TranslationScorer {
    tokenizer: Arc<dyn Tokenizer>,
    embedder: Arc<dyn Embedder>,
    weights: Weights,
}

impl TranslationScorer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            tokenizer,
            embedder,
            weights: Weights::default(),
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Score `candidate` as a translation of `question`.
    ///
    /// Without a known Japanese reference the corpus is searched for a pair
    /// with the same English, and only character similarity is used.
    pub async fn score(
        &self,
        candidate: &str,
        question: Option<&SentencePair>,
        corpus: &dyn Corpus,
    ) -> Result<ScoreResult, ScoringError> {
        let english = question.map(|q| q.english.clone()).unwrap_or_default();
        let mut trace = ScoringTrace::default();

        if candidate.trim().is_empty() {
            tracing::debug!("Empty answer, skipping scoring");
            return Ok(ScoreResult {
                score: 0,
                grade: Grade::F,
                feedback: EMPTY_ANSWER_FEEDBACK.to_string(),
                english,
                reference_translation: None,
                scoring_details: trace,
            });
        }

        trace.step("ステップ1: 正解の和訳を取得");

        let reference = question.and_then(|q| q.japanese.clone());
        let (raw, reference) = match reference {
            Some(reference) => {
                trace.step(format!("正解: {reference}"));
                let raw = self.score_direct(candidate, &reference, &mut trace).await?;
                (raw, Some(reference))
            }
            None => self.score_fallback(candidate, &english, corpus, &mut trace),
        };

        let score = final_score(raw);
        let grade = Grade::from_score(i64::from(score));
        trace.raw_similarity = raw;
        trace.step(format!("最終スコア: {score}点 (評価 {grade})"));

        tracing::info!("Scored answer: {} ({}), raw {:.4}", score, grade, raw);

        Ok(ScoreResult {
            score,
            grade,
            feedback: grade.feedback().to_string(),
            english,
            reference_translation: reference,
            scoring_details: trace,
        })
    }

    async fn score_direct(
        &self,
        candidate: &str,
        reference: &str,
        trace: &mut ScoringTrace,
    ) -> Result<f64, ScoringError> {
        trace.step("ステップ2: 形態素解析による内容語の比較（助詞・助動詞などは除外）");
        let overlap = word_overlap(self.tokenizer.as_ref(), candidate, reference)?;
        let common_words = overlap.common_words();

        trace.step(format!("あなたの内容語: {}個", overlap.candidate_words.len()));
        trace.step(format!("正解の内容語: {}個", overlap.reference_words.len()));
        trace.step(format!("共通の内容語: {}個", common_words.len()));
        if !common_words.is_empty() {
            trace.step(format!("共通語: {}", preview(&common_words)));
        }
        trace.step(format!(
            "単語一致率: {:.4} ({:.2}%)",
            overlap.ratio,
            overlap.ratio * 100.0
        ));
        tracing::debug!("Word overlap {:.4}", overlap.ratio);

        trace.step("ステップ3: 意味ベクトルのコサイン類似度");
        let semantic = semantic_similarity(self.embedder.as_ref(), candidate, reference).await?;
        trace.step(format!("ベクトル類似度: {:.4} ({:.2}%)", semantic, semantic * 100.0));
        tracing::debug!("Semantic similarity {:.4}", semantic);

        trace.step("ステップ4: 文字列の一致度");
        let string = string_similarity(candidate, reference);
        trace.step(format!(
            "文字列類似度: {:.4} ({:.2}%), 一致 {}/{}文字",
            string.ratio,
            string.ratio * 100.0,
            string.matched_length,
            string.total_length
        ));
        tracing::debug!("String similarity {:.4}", string.ratio);

        let weights = self.weights;
        let raw = weights.combine(semantic, overlap.ratio, string.ratio);

        trace.step("ステップ5: 重み付きの総合類似度");
        trace.step(format!(
            "計算式: ベクトル×{:.2} + 単語×{:.2} + 文字列×{:.2}",
            weights.vector, weights.word, weights.string
        ));
        trace.step(format!(
            "= {:.4}×{:.2} + {:.4}×{:.2} + {:.4}×{:.2}",
            semantic, weights.vector, overlap.ratio, weights.word, string.ratio, weights.string
        ));
        trace.step(format!(
            "= {:.4} + {:.4} + {:.4} = {:.4}",
            semantic * weights.vector,
            overlap.ratio * weights.word,
            string.ratio * weights.string,
            raw
        ));

        trace.user_words = overlap.candidate_words;
        trace.ref_words = overlap.reference_words;
        trace.common_words = common_words;
        trace.word_overlap = Some(overlap.ratio);
        trace.vector_similarity = Some(semantic);
        trace.weights = Some(weights);
        record_string(trace, string);

        Ok(raw)
    }

    /// Look up a reference by English text and score on characters alone
    fn score_fallback(
        &self,
        candidate: &str,
        english: &str,
        corpus: &dyn Corpus,
        trace: &mut ScoringTrace,
    ) -> (f64, Option<String>) {
        trace.step("正解の和訳がないため、コーパスから同じ英文の問題を検索します");

        let wanted = english.trim().to_lowercase();
        let mut best_score = 0.0;
        let mut best: Option<(String, StringSimilarity)> = None;

        for doc in corpus.all_documents() {
            let TaggedText::Pair { english, japanese } = parse_tagged_text(&doc.text) else {
                continue;
            };
            if english.trim().to_lowercase() != wanted {
                continue;
            }

            let similarity = string_similarity(candidate, &japanese);
            if similarity.ratio > best_score {
                best_score = similarity.ratio;
                best = Some((japanese, similarity));
            }
        }

        match best {
            Some((reference, similarity)) => {
                tracing::debug!("Fallback reference found, string similarity {:.4}", best_score);
                trace.step(format!("正解: {reference}"));
                trace.step(format!(
                    "文字列類似度のみで採点: {:.4} ({:.2}%)",
                    best_score,
                    best_score * 100.0
                ));
                record_string(trace, similarity);
                (best_score, Some(reference))
            }
            None => {
                tracing::warn!("No reference translation found for \"{}\"", english);
                trace.step("一致する問題が見つかりませんでした");
                (0.0, None)
            }
        }
    }
}

/// `floor(raw × 100)` clamped to 0–100
pub fn final_score(raw: f64) -> u32 {
    if raw.is_nan() {
        return 0;
    }
    (raw * 100.0).floor().clamp(0.0, 100.0) as u32
}

fn record_string(trace: &mut ScoringTrace, similarity: StringSimilarity) {
    trace.string_similarity = Some(similarity.ratio);
    trace.normalized_user = similarity.normalized_user;
    trace.normalized_reference = similarity.normalized_reference;
    trace.diff_parts = similarity.diff_parts;
    trace.matched_length = similarity.matched_length;
    trace.total_length = similarity.total_length;
}

fn preview(words: &[String]) -> String {
    let shown = words[..words.len().min(COMMON_WORDS_PREVIEW)].join("、");
    match words.len().saturating_sub(COMMON_WORDS_PREVIEW) {
        0 => shown,
        rest => format!("{shown}... (他{rest}個)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_score_floors_and_clamps() {
        assert_eq!(final_score(1.0), 100);
        assert_eq!(final_score(0.899999), 89);
        assert_eq!(final_score(0.9), 90);
        assert_eq!(final_score(-0.2), 0);
        assert_eq!(final_score(1.5), 100);
        assert_eq!(final_score(f64::NAN), 0);
    }

    #[test]
    fn preview_truncates() {
        let words: Vec<String> = (0..18).map(|i| format!("w{i}")).collect();
        let text = preview(&words);
        assert!(text.starts_with("w0、w1"));
        assert!(text.ends_with("... (他3個)"));
        assert_eq!(preview(&words[..2]), "w0、w1");
    }
}
