use honyaku_core::language::{Token, TokenizeError, Tokenizer};
use unicode_normalization::UnicodeNormalization;

use crate::lexicon::{LexEntry, Lexicon};
use crate::script::Script;

/// One-character function words that may end okurigana.
///
/// Any other single hiragana after a stem is read as part of the word
/// (書|い|た, 美|し|い).
const OKURIGANA_BREAKS: [&str; 17] = [
    "て", "で", "た", "だ", "が", "を", "に", "は", "の", "と", "も", "へ", "や", "ば", "ず", "ね",
    "よ",
];

/// Lexicon-driven Japanese tokenizer.
///
/// Splits on script boundaries, cuts hiragana with a longest-match
/// function-word table and glues remaining hiragana onto the preceding
/// stem as okurigana. Tags follow IPADIC naming so filters written for a
/// full morphological analyser work unchanged.
pub struct JapaneseTokenizer {
    lexicon: Lexicon,
}

/// Content word still collecting okurigana
struct OpenWord {
    surface: String,
    kanji_stem: bool,
    okurigana: bool,
}

impl OpenWord {
    fn into_token(self) -> Token {
        let (coarse, detail) = match (self.kanji_stem, self.okurigana) {
            (true, true) if self.surface.ends_with('い') => ("形容詞", "自立"),
            (true, true) => ("動詞", "自立"),
            _ => ("名詞", "一般"),
        };
        Token::new(self.surface, coarse, &[detail])
    }
}

impl JapaneseTokenizer {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::with_defaults())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        tracing::debug!("Japanese tokenizer ready ({} lexicon entries)", lexicon.len());
        Self { lexicon }
    }

    fn segment(&self, text: &str) -> Vec<Token> {
        let normalized: String = text.nfkc().collect();
        let chars: Vec<char> = normalized.chars().collect();

        let mut tokens: Vec<Token> = Vec::new();
        let mut open: Option<OpenWord> = None;
        let mut i = 0;

        while i < chars.len() {
            let script = Script::of(chars[i]);

            match script {
                Script::Whitespace => {
                    flush(&mut open, &mut tokens);
                    i += 1;
                }
                Script::Symbol => {
                    flush(&mut open, &mut tokens);
                    tokens.push(Token::new(chars[i].to_string(), "記号", &["一般"]));
                    i += 1;
                }
                Script::Kanji | Script::Katakana | Script::Alphanumeric => {
                    flush(&mut open, &mut tokens);
                    let end = run_end(&chars, i, script);
                    let surface: String = chars[i..end].iter().collect();

                    if script == Script::Kanji {
                        open = Some(OpenWord {
                            surface,
                            kanji_stem: true,
                            okurigana: false,
                        });
                    } else {
                        tokens.push(Token::new(surface, "名詞", &["一般"]));
                    }
                    i = end;
                }
                Script::Hiragana => {
                    let end = run_end(&chars, i, script);
                    let in_word = open.is_some();
                    let after_te = !in_word
                        && tokens
                            .last()
                            .is_some_and(|t| t.coarse_pos == "助詞" && (t.surface == "て" || t.surface == "で"));

                    let matched = self.lexicon.longest_prefix(&chars[i..end], |surface, entry| {
                        !in_word || ends_okurigana(surface, entry)
                    });

                    match matched {
                        Some((len, entry)) => {
                            flush(&mut open, &mut tokens);
                            let surface: String = chars[i..i + len].iter().collect();
                            let detail = if entry.after_te && !after_te {
                                "自立"
                            } else {
                                entry.detail
                            };
                            tokens.push(Token::new(surface, entry.coarse, &[detail]));
                            i += len;
                        }
                        None => {
                            match open.as_mut() {
                                Some(word) => {
                                    word.surface.push(chars[i]);
                                    word.okurigana = true;
                                }
                                None => {
                                    open = Some(OpenWord {
                                        surface: chars[i].to_string(),
                                        kanji_stem: false,
                                        okurigana: false,
                                    });
                                }
                            }
                            i += 1;
                        }
                    }
                }
            }
        }

        flush(&mut open, &mut tokens);
        tokens
    }
}

impl Default for JapaneseTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for JapaneseTokenizer {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        let tokens = self.segment(text);
        tracing::trace!("Tokenized {} chars into {} tokens", text.chars().count(), tokens.len());
        Ok(tokens)
    }
}

/// Inside a word only grammatical suffixes may cut the okurigana
fn ends_okurigana(surface: &str, entry: &LexEntry) -> bool {
    let grammatical = matches!(entry.coarse, "助詞" | "助動詞") || entry.detail == "接尾";
    let single = surface.chars().count() == 1;
    grammatical && (!single || OKURIGANA_BREAKS.contains(&surface))
}

fn flush(open: &mut Option<OpenWord>, tokens: &mut Vec<Token>) {
    if let Some(word) = open.take() {
        tokens.push(word.into_token());
    }
}

fn run_end(chars: &[char], start: usize, script: Script) -> usize {
    if !script.groups_runs() && script != Script::Hiragana {
        return start + 1;
    }
    chars[start..]
        .iter()
        .position(|c| Script::of(*c) != script)
        .map_or(chars.len(), |offset| start + offset)
}
