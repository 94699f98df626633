use honyaku_core::{Token, TokenizeError, Tokenizer};

/// Part-of-speech tags that never carry content
pub const EXCLUDED_POS: [&str; 6] = ["助詞", "助動詞", "記号", "接続詞", "接頭詞", "非自立"];

/// Copulas, auxiliaries and endings dropped regardless of their tag
pub const EXCLUDED_WORDS: [&str; 13] = [
    "です", "ます", "である", "だ", "た", "れる", "られる", "せる", "させる", "ない", "ぬ", "う", "よう",
];

/// Whether a token survives the content-word filter.
///
/// The coarse tag and its first sub-category are both checked, since
/// IPADIC-style tagsets put 非自立 in the sub-category.
pub fn is_content_token(token: &Token) -> bool {
    let sub_category = token.features.get(1).map(String::as_str).unwrap_or("");
    let excluded_pos = EXCLUDED_POS
        .iter()
        .any(|pos| token.coarse_pos.contains(pos) || sub_category.contains(pos));

    !excluded_pos && !EXCLUDED_WORDS.contains(&token.surface.as_str()) && token.char_len() > 1
}

/// Content words of `text`, in tokenizer order
pub fn content_words(tokenizer: &dyn Tokenizer, text: &str) -> Result<Vec<String>, TokenizeError> {
    let words = tokenizer
        .tokenize(text)?
        .into_iter()
        .filter(is_content_token)
        .map(|t| t.surface)
        .collect();

    Ok(words)
}

#[cfg(test)]
mod tests {
    use honyaku_lang_japanese::JapaneseTokenizer;

    use super::*;

    #[test]
    fn drops_function_tags() {
        assert!(!is_content_token(&Token::new("から", "助詞", &["格助詞"])));
        assert!(!is_content_token(&Token::new("ました", "助動詞", &["*"])));
        assert!(!is_content_token(&Token::new("「」", "記号", &["括弧開"])));
        assert!(!is_content_token(&Token::new("しかし", "接続詞", &["*"])));
        assert!(!is_content_token(&Token::new("いる", "動詞", &["非自立"])));
        assert!(!is_content_token(&Token::new("こと", "名詞", &["非自立"])));
    }

    #[test]
    fn drops_listed_words_and_single_chars() {
        assert!(!is_content_token(&Token::new("られる", "動詞", &["接尾"])));
        assert!(!is_content_token(&Token::new("よう", "名詞", &["一般"])));
        assert!(!is_content_token(&Token::new("猫", "名詞", &["一般"])));
    }

    #[test]
    fn keeps_content() {
        assert!(is_content_token(&Token::new("人工知能", "名詞", &["一般"])));
        assert!(is_content_token(&Token::new("変え", "動詞", &["自立"])));
        assert!(is_content_token(&Token::new("美しい", "形容詞", &["自立"])));
    }

    #[test]
    fn filters_real_sentence() {
        let tokenizer = JapaneseTokenizer::new();
        let words = content_words(&tokenizer, "人工知能は私たちの生活と仕事のあり方を変えています。").unwrap();
        assert_eq!(words, vec!["人工知能", "たち", "生活", "仕事", "あり", "変え"]);
    }

    #[test]
    fn single_char_sentence_has_no_content() {
        let tokenizer = JapaneseTokenizer::new();
        assert!(content_words(&tokenizer, "猫が机の上で寝ている。").unwrap().is_empty());
        assert!(content_words(&tokenizer, "").unwrap().is_empty());
    }
}
