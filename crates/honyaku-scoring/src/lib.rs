pub mod content;
pub mod engine;
pub mod error;
pub mod overlap;
pub mod question;
pub mod semantic;
pub mod sequence;
pub mod session;
pub mod similarity;

pub use content::{content_words, is_content_token};
pub use engine::{TranslationScorer, final_score};
pub use error::ScoringError;
pub use overlap::{WordOverlap, overlap_ratio, word_overlap};
pub use question::{QuestionSelector, TaggedText, parse_tagged_text};
pub use semantic::semantic_similarity;
pub use sequence::{OpTag, Opcode, SequenceMatcher};
pub use session::QuizSession;
pub use similarity::{StringSimilarity, string_similarity};

#[cfg(test)]
mod tests;
