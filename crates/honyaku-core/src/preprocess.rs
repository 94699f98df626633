/// Sentence punctuation ignored when comparing translations
const IGNORED_PUNCTUATION: [char; 4] = ['、', '。', '！', '？'];

/// Canonical form used for character-level comparison.
///
/// Lower-cases, then drops Japanese sentence punctuation and every
/// whitespace character (runs collapse to nothing, not to a space).
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !IGNORED_PUNCTUATION.contains(c))
        .collect()
}
