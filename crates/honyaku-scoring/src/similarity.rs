use honyaku_core::normalize;
use honyaku_types::{DiffPart, DiffTag};

use crate::sequence::{OpTag, SequenceMatcher};

/// Character-level comparison of two normalized strings
#[derive(Debug, Clone, PartialEq)]
pub struct StringSimilarity {
    pub ratio: f64,
    pub diff_parts: Vec<DiffPart>,
    pub normalized_user: String,
    pub normalized_reference: String,
    /// Characters covered by `match` parts
    pub matched_length: usize,
    /// Length of the normalized reference in characters
    pub total_length: usize,
}

/// Compare `candidate` against `reference` after normalization.
///
/// Concatenating the user segments of `diff_parts` gives back the
/// normalized candidate; the reference segments give back the normalized
/// reference.
pub fn string_similarity(candidate: &str, reference: &str) -> StringSimilarity {
    let normalized_user = normalize(candidate);
    let normalized_reference = normalize(reference);

    let user: Vec<char> = normalized_user.chars().collect();
    let reference_chars: Vec<char> = normalized_reference.chars().collect();
    let matcher = SequenceMatcher::new(&user, &reference_chars);

    let segment = |chars: &[char], start: usize, end: usize| -> String { chars[start..end].iter().collect() };

    let mut matched_length = 0;
    let diff_parts = matcher
        .opcodes()
        .into_iter()
        .map(|op| {
            let tag = match op.tag {
                OpTag::Equal => {
                    matched_length += op.a_end - op.a_start;
                    DiffTag::Match
                }
                OpTag::Replace => DiffTag::Replace,
                OpTag::Delete => DiffTag::Delete,
                OpTag::Insert => DiffTag::Insert,
            };
            DiffPart {
                tag,
                user_segment: segment(&user, op.a_start, op.a_end),
                ref_segment: segment(&reference_chars, op.b_start, op.b_end),
            }
        })
        .collect();

    StringSimilarity {
        ratio: matcher.ratio(),
        diff_parts,
        total_length: reference_chars.len(),
        matched_length,
        normalized_user,
        normalized_reference,
    }
}
