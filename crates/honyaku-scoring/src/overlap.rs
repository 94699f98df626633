use std::collections::HashMap;

use honyaku_core::{TokenizeError, Tokenizer};

use crate::content::content_words;

/// Content-word recall of a candidate against a reference
#[derive(Debug, Clone, PartialEq)]
pub struct WordOverlap {
    pub ratio: f64,
    pub candidate_words: Vec<String>,
    pub reference_words: Vec<String>,
    /// Shared words with their multiset-intersection counts, in candidate order
    pub common: Vec<(String, usize)>,
}

impl WordOverlap {
    pub fn common_count(&self) -> usize {
        self.common.iter().map(|(_, n)| n).sum()
    }

    /// Shared words with repeats expanded
    pub fn common_words(&self) -> Vec<String> {
        self.common
            .iter()
            .flat_map(|(word, n)| std::iter::repeat_n(word.clone(), *n))
            .collect()
    }
}

/// Tokenize both sides and compute their content-word overlap
pub fn word_overlap(
    tokenizer: &dyn Tokenizer,
    candidate: &str,
    reference: &str,
) -> Result<WordOverlap, TokenizeError> {
    let candidate_words = content_words(tokenizer, candidate)?;
    let reference_words = content_words(tokenizer, reference)?;
    let (ratio, common) = overlap_ratio(&candidate_words, &reference_words);

    Ok(WordOverlap {
        ratio,
        candidate_words,
        reference_words,
        common,
    })
}

/// Multiset recall: |C ∩ R| / |R|, or 0.0 when `reference` is empty
pub fn overlap_ratio(candidate: &[String], reference: &[String]) -> (f64, Vec<(String, usize)>) {
    let reference_counts = count(reference);

    // Preserve first-appearance order of the candidate
    let mut candidate_counts: Vec<(&str, usize)> = Vec::new();
    for word in candidate {
        match candidate_counts.iter_mut().find(|(w, _)| *w == word.as_str()) {
            Some((_, n)) => *n += 1,
            None => candidate_counts.push((word.as_str(), 1)),
        }
    }

    let common: Vec<(String, usize)> = candidate_counts
        .into_iter()
        .filter_map(|(word, n)| {
            let shared = n.min(reference_counts.get(word).copied().unwrap_or(0));
            (shared > 0).then(|| (word.to_string(), shared))
        })
        .collect();

    if reference.is_empty() {
        return (0.0, common);
    }

    let shared: usize = common.iter().map(|(_, n)| n).sum();
    (shared as f64 / reference.len() as f64, common)
}

fn count(words: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for word in words {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }
    counts
}
