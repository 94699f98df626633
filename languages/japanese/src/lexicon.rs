use std::collections::HashMap;

/// Part-of-speech data for a closed-class hiragana word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexEntry {
    pub coarse: &'static str,
    pub detail: &'static str,
    /// Only dependent when it follows the te-form (寝て|いる)
    pub after_te: bool,
}

/// Closed-class word list used to cut hiragana runs
pub struct Lexicon {
    entries: HashMap<&'static str, LexEntry>,
    max_chars: usize,
}

impl Lexicon {
    /// Create empty lexicon
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            max_chars: 0,
        }
    }

    /// Create with the embedded particle, auxiliary and function-word tables
    pub fn with_defaults() -> Self {
        let mut lexicon = Self::new();

        let particles = [
            ("が", "格助詞"), ("を", "格助詞"), ("に", "格助詞"), ("へ", "格助詞"),
            ("と", "格助詞"), ("で", "格助詞"), ("から", "格助詞"), ("まで", "副助詞"),
            ("より", "格助詞"), ("の", "連体化"), ("は", "係助詞"), ("も", "係助詞"),
            ("こそ", "係助詞"), ("さえ", "副助詞"), ("でも", "副助詞"), ("しか", "係助詞"),
            ("ばかり", "副助詞"), ("だけ", "副助詞"), ("ほど", "副助詞"), ("くらい", "副助詞"),
            ("ぐらい", "副助詞"), ("など", "副助詞"), ("や", "並立助詞"), ("か", "副助詞"),
            ("ね", "終助詞"), ("よ", "終助詞"), ("な", "終助詞"), ("わ", "終助詞"),
            ("ぞ", "終助詞"), ("て", "接続助詞"), ("ば", "接続助詞"), ("けど", "接続助詞"),
            ("けれど", "接続助詞"), ("けれども", "接続助詞"), ("のに", "接続助詞"),
            ("ので", "接続助詞"), ("ながら", "接続助詞"), ("たり", "並立助詞"),
            ("だり", "並立助詞"), ("として", "格助詞"), ("について", "格助詞"),
            ("によって", "格助詞"), ("において", "格助詞"), ("にとって", "格助詞"),
        ];

        let auxiliaries = [
            "です", "でし", "でした", "でしょ", "でしょう", "ます", "まし", "ました",
            "ません", "ましょう", "だ", "だっ", "だろう", "である", "た", "ない", "なかっ",
            "なく", "ぬ", "ず", "う", "よう", "れる", "られる", "れ", "られ", "せる",
            "させる", "させ", "たい", "たく", "らしい", "そう", "みたい",
        ];

        let conjunctions = [
            "しかし", "そして", "また", "だから", "それで", "それから", "ところが",
            "および", "または", "つまり", "なお", "さらに", "すると",
        ];

        // Dependent verbs after て/で; plain verbs elsewhere
        let dependent_verbs = [
            "いる", "い", "いた", "ある", "あっ", "あり", "しまう", "しまい", "しまっ",
            "おく", "おき", "くる", "き", "いく", "いっ", "みる", "み", "ください",
        ];

        let dependent_nouns = ["こと", "もの", "ため", "ところ", "わけ", "はず"];

        let content = [
            ("する", "動詞", "自立"), ("し", "動詞", "自立"), ("さ", "動詞", "自立"),
            ("これ", "名詞", "代名詞"), ("それ", "名詞", "代名詞"), ("あれ", "名詞", "代名詞"),
            ("どれ", "名詞", "代名詞"), ("ここ", "名詞", "代名詞"), ("そこ", "名詞", "代名詞"),
            ("どこ", "名詞", "代名詞"), ("あなた", "名詞", "代名詞"),
            ("この", "連体詞", "*"), ("その", "連体詞", "*"), ("あの", "連体詞", "*"),
            ("どの", "連体詞", "*"), ("とても", "副詞", "一般"), ("もっと", "副詞", "一般"),
            ("まだ", "副詞", "一般"), ("もう", "副詞", "一般"), ("すぐ", "副詞", "一般"),
            ("たち", "名詞", "接尾"), ("さん", "名詞", "接尾"),
        ];

        for (surface, detail) in particles {
            lexicon.insert(surface, "助詞", detail, false);
        }
        for surface in auxiliaries {
            lexicon.insert(surface, "助動詞", "*", false);
        }
        for surface in conjunctions {
            lexicon.insert(surface, "接続詞", "*", false);
        }
        for surface in dependent_verbs {
            lexicon.insert(surface, "動詞", "非自立", true);
        }
        for surface in dependent_nouns {
            lexicon.insert(surface, "名詞", "非自立", false);
        }
        for (surface, coarse, detail) in content {
            lexicon.insert(surface, coarse, detail, false);
        }
        lexicon.insert("お", "接頭詞", "名詞接続", false);
        lexicon.insert("ご", "接頭詞", "名詞接続", false);

        lexicon
    }

    pub fn insert(&mut self, surface: &'static str, coarse: &'static str, detail: &'static str, after_te: bool) {
        self.max_chars = self.max_chars.max(surface.chars().count());
        self.entries.insert(
            surface,
            LexEntry {
                coarse,
                detail,
                after_te,
            },
        );
    }

    pub fn get(&self, surface: &str) -> Option<&LexEntry> {
        self.entries.get(surface)
    }

    /// Longest entry that is a prefix of `chars`, with its length in chars.
    ///
    /// `accept` decides whether a matching entry may be used here.
    pub fn longest_prefix(
        &self,
        chars: &[char],
        accept: impl Fn(&str, &LexEntry) -> bool,
    ) -> Option<(usize, LexEntry)> {
        let longest = self.max_chars.min(chars.len());

        for len in (1..=longest).rev() {
            let candidate: String = chars[..len].iter().collect();
            if let Some(entry) = self.entries.get(candidate.as_str()) {
                if accept(&candidate, entry) {
                    return Some((len, *entry));
                }
            }
        }

        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::with_defaults()
    }
}
