use std::collections::BTreeMap;
use std::sync::Arc;

use honyaku_core::Corpus;
use honyaku_types::{Grade, QuizStatistics, ScoreResult, SentencePair};

use crate::engine::TranslationScorer;
use crate::error::ScoringError;
use crate::question::QuestionSelector;

/// One learner's run through the quiz: the current question and the
/// history of scored answers.
pub struct QuizSession {
    corpus: Arc<dyn Corpus>,
    scorer: TranslationScorer,
    selector: QuestionSelector,
    rng: fastrand::Rng,
    current: Option<SentencePair>,
    history: Vec<ScoreResult>,
}

impl QuizSession {
    pub fn new(corpus: Arc<dyn Corpus>, scorer: TranslationScorer, selector: QuestionSelector) -> Self {
        Self {
            corpus,
            scorer,
            selector,
            rng: fastrand::Rng::new(),
            current: None,
            history: Vec::new(),
        }
    }

    /// Fix the question order, for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    /// Draw a new question and make it current
    pub fn next_question(&mut self) -> Option<SentencePair> {
        self.current = self.selector.next_question(self.corpus.as_ref(), &mut self.rng);
        self.current.clone()
    }

    pub fn current_question(&self) -> Option<&SentencePair> {
        self.current.as_ref()
    }

    /// Score an answer to the current question
    pub async fn score_translation(&mut self, candidate: &str) -> Result<ScoreResult, ScoringError> {
        let question = self.current.clone();
        self.score_against(candidate, question.as_ref()).await
    }

    /// Score an answer to an explicit question and record it.
    ///
    /// Empty answers are scored but not recorded.
    pub async fn score_against(
        &mut self,
        candidate: &str,
        question: Option<&SentencePair>,
    ) -> Result<ScoreResult, ScoringError> {
        let result = self.scorer.score(candidate, question, self.corpus.as_ref()).await?;

        if !candidate.trim().is_empty() {
            self.history.push(result.clone());
        }
        Ok(result)
    }

    pub fn history(&self) -> &[ScoreResult] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Aggregate over the history, None when nothing was scored
    pub fn statistics(&self) -> Option<QuizStatistics> {
        statistics(&self.history)
    }
}

pub fn statistics(history: &[ScoreResult]) -> Option<QuizStatistics> {
    let scores: Vec<u32> = history.iter().map(|r| r.score).collect();
    let highest_score = *scores.iter().max()?;
    let lowest_score = *scores.iter().min()?;
    let total: u64 = scores.iter().map(|s| u64::from(*s)).sum();

    let mut grade_distribution: BTreeMap<Grade, usize> = BTreeMap::new();
    for result in history {
        *grade_distribution.entry(result.grade).or_insert(0) += 1;
    }

    Some(QuizStatistics {
        total_questions: history.len(),
        average_score: total as f64 / history.len() as f64,
        highest_score,
        lowest_score,
        grade_distribution,
    })
}

#[cfg(test)]
mod tests {
    use honyaku_types::ScoringTrace;

    use super::*;

    fn result(score: u32) -> ScoreResult {
        let grade = Grade::from_score(i64::from(score));
        ScoreResult {
            score,
            grade,
            feedback: grade.feedback().to_string(),
            english: String::new(),
            reference_translation: None,
            scoring_details: ScoringTrace::default(),
        }
    }

    #[test]
    fn statistics_over_history() {
        let history = vec![result(95), result(72), result(30), result(91)];
        let stats = statistics(&history).unwrap();
        assert_eq!(stats.total_questions, 4);
        assert!((stats.average_score - 72.0).abs() < 1e-12);
        assert_eq!(stats.highest_score, 95);
        assert_eq!(stats.lowest_score, 30);
        assert_eq!(stats.grade_distribution.get(&Grade::S), Some(&2));
        assert_eq!(stats.grade_distribution.get(&Grade::B), Some(&1));
        assert_eq!(stats.grade_distribution.get(&Grade::F), Some(&1));
        assert_eq!(stats.grade_distribution.get(&Grade::A), None);
    }

    #[test]
    fn no_statistics_without_history() {
        assert!(statistics(&[]).is_none());
    }
}
