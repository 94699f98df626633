use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A question drawn from the corpus.
///
/// `japanese` is absent when the English sentence was extracted from prose,
/// in which case scoring falls back to a corpus lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    pub english: String,
    pub japanese: Option<String>,
    pub source: String,
    pub doc_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    Match,
    Replace,
    Delete,
    Insert,
}

impl DiffTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffTag::Match => "match",
            DiffTag::Replace => "replace",
            DiffTag::Delete => "delete",
            DiffTag::Insert => "insert",
        }
    }
}

/// One aligned segment of the candidate/reference diff.
///
/// `user_segment` is empty for inserts, `ref_segment` is empty for deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPart {
    pub tag: DiffTag,
    pub user_segment: String,
    pub ref_segment: String,
}

/// Weights of the three similarity signals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub vector: f64,
    pub word: f64,
    pub string: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            vector: 0.40,
            word: 0.40,
            string: 0.20,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.vector + self.word + self.string
    }

    /// Weighted sum of the three signals, in vector/word/string order
    pub fn combine(&self, vector: f64, word: f64, string: f64) -> f64 {
        vector * self.vector + word * self.word + string * self.string
    }
}

/// Step-by-step record of a single scoring call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringTrace {
    pub steps: Vec<String>,
    pub normalized_user: String,
    pub normalized_reference: String,
    pub user_words: Vec<String>,
    pub ref_words: Vec<String>,
    pub common_words: Vec<String>,
    pub word_overlap: Option<f64>,
    pub vector_similarity: Option<f64>,
    pub string_similarity: Option<f64>,
    pub diff_parts: Vec<DiffPart>,
    /// Characters covered by `match` segments
    pub matched_length: usize,
    /// Characters in the normalized reference
    pub total_length: usize,
    pub weights: Option<Weights>,
    pub raw_similarity: f64,
}

impl ScoringTrace {
    pub fn step(&mut self, line: impl Into<String>) {
        self.steps.push(line.into());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const ALL: [Grade; 6] = [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Map an integer score to its grade bucket
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 90 => Grade::S,
            s if s >= 80 => Grade::A,
            s if s >= 70 => Grade::B,
            s if s >= 60 => Grade::C,
            s if s >= 40 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Learner-facing feedback for the grade
    pub fn feedback(&self) -> &'static str {
        match self {
            Grade::S => "素晴らしい！ほぼ完璧な翻訳です。",
            Grade::A => "非常に良い翻訳です！",
            Grade::B => "良い翻訳です。いくつか改善点があります。",
            Grade::C => "まずまずです。もう少し正確に翻訳しましょう。",
            Grade::D => "意味は伝わっていますが、改善が必要です。",
            Grade::F => "翻訳の精度が低いです。再度チャレンジしましょう。",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub grade: Grade,
    pub feedback: String,
    pub english: String,
    pub reference_translation: Option<String>,
    pub scoring_details: ScoringTrace,
}

/// Aggregate over a session's score history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizStatistics {
    pub total_questions: usize,
    pub average_score: f64,
    pub highest_score: u32,
    pub lowest_score: u32,
    pub grade_distribution: BTreeMap<Grade, usize>,
}
