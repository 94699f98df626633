use honyaku_config::quiz::QuizConfig;
use honyaku_core::{Corpus, Document};
use honyaku_types::SentencePair;

const ENGLISH_TAG: &str = "EN:";
const JAPANESE_TAG: &str = "JP:";

/// How a stored document reads as a question source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggedText {
    /// `EN:` and `JP:` lines are both present and non-empty
    Pair { english: String, japanese: String },
    /// Carries a tag but not a usable pair
    Incomplete,
    /// Plain prose
    Untagged,
}

/// Classify `text` by its `EN:`/`JP:` lines. Later lines win over earlier ones.
pub fn parse_tagged_text(text: &str) -> TaggedText {
    if !text.contains(ENGLISH_TAG) && !text.contains(JAPANESE_TAG) {
        return TaggedText::Untagged;
    }

    let mut english = None;
    let mut japanese = None;
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(ENGLISH_TAG) {
            english = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(JAPANESE_TAG) {
            japanese = Some(rest.trim().to_string());
        }
    }

    match (english, japanese) {
        (Some(english), Some(japanese)) if !english.is_empty() && !japanese.is_empty() => {
            TaggedText::Pair { english, japanese }
        }
        _ => TaggedText::Incomplete,
    }
}

/// Picks quiz questions from a corpus
#[derive(Debug, Clone)]
pub struct QuestionSelector {
    min_chars: usize,
    max_chars: usize,
    min_ascii_ratio: f64,
}

impl QuestionSelector {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            min_chars: config.min_sentence_chars,
            max_chars: config.max_sentence_chars,
            min_ascii_ratio: config.min_ascii_ratio,
        }
    }

    /// Random question, or None when nothing in the corpus is usable
    pub fn next_question(&self, corpus: &dyn Corpus, rng: &mut fastrand::Rng) -> Option<SentencePair> {
        let mut documents = corpus.all_documents();
        if documents.is_empty() {
            tracing::warn!("Corpus is empty, no question available");
            return None;
        }
        rng.shuffle(&mut documents);

        for doc in &documents {
            match parse_tagged_text(&doc.text) {
                TaggedText::Pair { english, japanese } => {
                    return Some(question(doc, english, Some(japanese)));
                }
                TaggedText::Incomplete => {
                    tracing::debug!("Skipping document {} with an incomplete EN/JP pair", doc.id);
                }
                TaggedText::Untagged => {
                    let sentences = self.extract_english_sentences(&doc.text);
                    if !sentences.is_empty() {
                        let pick = sentences[rng.usize(..sentences.len())].clone();
                        return Some(question(doc, pick, None));
                    }
                }
            }
        }

        tracing::warn!("No usable question in {} documents", documents.len());
        None
    }

    /// Sentences of `text` suitable as questions.
    ///
    /// Splits after `.`, `!` or `?` followed by whitespace and keeps trimmed
    /// sentences within the length bounds that are mostly ASCII.
    pub fn extract_english_sentences(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .map(str::trim)
            .filter(|s| {
                let len = s.chars().count();
                len >= self.min_chars && len <= self.max_chars && ascii_ratio(s) > self.min_ascii_ratio
            })
            .map(str::to_string)
            .collect()
    }
}

impl Default for QuestionSelector {
    fn default() -> Self {
        Self::new(&QuizConfig::default())
    }
}

fn question(doc: &Document, english: String, japanese: Option<String>) -> SentencePair {
    SentencePair {
        english,
        japanese,
        source: doc.source(),
        doc_id: doc.id.clone(),
    }
}

/// Split after terminal punctuation followed by whitespace; the
/// punctuation and whitespace are dropped, except at the end of the text
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if !chars.peek().is_some_and(|(_, next)| next.is_whitespace()) {
            continue;
        }

        sentences.push(&text[start..i]);
        while let Some((_, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            chars.next();
        }
        start = chars.peek().map_or(text.len(), |(j, _)| *j);
    }

    sentences.push(&text[start..]);
    sentences
}

fn ascii_ratio(s: &str) -> f64 {
    let total = s.chars().count();
    if total == 0 {
        return 0.0;
    }
    s.chars().filter(char::is_ascii).count() as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE: &str = "Machine learning systems improve with more data over time. Short one! \
        Artificial intelligence is transforming the way we live and work today? \
        人工知能は私たちの生活と仕事のあり方を大きく変えています。これは日本語の文章です。とても長い説明が続きます。";

    #[test]
    fn parses_pairs() {
        assert_eq!(
            parse_tagged_text("EN:  Cats sleep.  \nJP: 猫は寝る。"),
            TaggedText::Pair {
                english: "Cats sleep.".into(),
                japanese: "猫は寝る。".into()
            }
        );
        assert_eq!(parse_tagged_text("EN: Only English"), TaggedText::Incomplete);
        assert_eq!(parse_tagged_text("EN: x\nJP:   "), TaggedText::Incomplete);
        assert_eq!(parse_tagged_text("Just prose."), TaggedText::Untagged);
    }

    #[test]
    fn later_lines_win() {
        assert_eq!(
            parse_tagged_text("EN: first\nEN: second\nJP: 二番目"),
            TaggedText::Pair {
                english: "second".into(),
                japanese: "二番目".into()
            }
        );
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(split_sentences("A b. C d!  E f? G."), vec!["A b", "C d", "E f", "G."]);
        assert_eq!(split_sentences("3.14 is pi"), vec!["3.14 is pi"]);
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn extracts_only_bounded_ascii_sentences() {
        let selector = QuestionSelector::default();
        let sentences = selector.extract_english_sentences(PROSE);
        assert_eq!(
            sentences,
            vec![
                "Machine learning systems improve with more data over time",
                "Artificial intelligence is transforming the way we live and work today",
            ]
        );
    }

    #[test]
    fn picks_pair_with_source() {
        let corpus = vec![Document::new("d1", "EN: Cats sleep.\nJP: 猫は寝る。").with_source("sample")];
        let mut rng = fastrand::Rng::with_seed(7);
        let q = QuestionSelector::default().next_question(&corpus, &mut rng).unwrap();
        assert_eq!(q.english, "Cats sleep.");
        assert_eq!(q.japanese.as_deref(), Some("猫は寝る。"));
        assert_eq!(q.source, "sample");
        assert_eq!(q.doc_id, "d1");
    }

    #[test]
    fn prose_question_has_no_reference() {
        let corpus = vec![Document::new("p", PROSE)];
        let mut rng = fastrand::Rng::with_seed(1);
        let q = QuestionSelector::default().next_question(&corpus, &mut rng).unwrap();
        assert!(q.japanese.is_none());
        assert_eq!(q.source, "Unknown");
        assert!(q.english.starts_with("Machine") || q.english.starts_with("Artificial"));
    }

    #[test]
    fn nothing_usable() {
        let mut rng = fastrand::Rng::with_seed(3);
        let selector = QuestionSelector::default();
        assert!(selector.next_question(&Vec::<Document>::new(), &mut rng).is_none());

        let corpus = vec![Document::new("a", "EN: lonely"), Document::new("b", "Too short.")];
        assert!(selector.next_question(&corpus, &mut rng).is_none());
    }
}
