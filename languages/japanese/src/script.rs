/// Writing system of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Kanji,
    Hiragana,
    Katakana,
    /// Latin letters and digits, half- or full-width
    Alphanumeric,
    Whitespace,
    Symbol,
}

impl Script {
    pub fn of(c: char) -> Self {
        match c as u32 {
            // 々 〆 and the CJK blocks
            0x3005 | 0x3006 | 0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF => Script::Kanji,
            0x3041..=0x309F => Script::Hiragana,
            // ・ is punctuation even though it sits in the katakana block
            0x30FB => Script::Symbol,
            0x30A0..=0x30FF | 0x31F0..=0x31FF | 0xFF66..=0xFF9F => Script::Katakana,
            _ if c.is_whitespace() => Script::Whitespace,
            _ if c.is_alphanumeric() => Script::Alphanumeric,
            _ => Script::Symbol,
        }
    }

    /// Scripts whose consecutive characters form one token
    pub fn groups_runs(&self) -> bool {
        matches!(self, Script::Kanji | Script::Katakana | Script::Alphanumeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_scripts() {
        assert_eq!(Script::of('猫'), Script::Kanji);
        assert_eq!(Script::of('々'), Script::Kanji);
        assert_eq!(Script::of('ね'), Script::Hiragana);
        assert_eq!(Script::of('コ'), Script::Katakana);
        assert_eq!(Script::of('ー'), Script::Katakana);
        assert_eq!(Script::of('・'), Script::Symbol);
        assert_eq!(Script::of('A'), Script::Alphanumeric);
        assert_eq!(Script::of('５'), Script::Alphanumeric);
        assert_eq!(Script::of('。'), Script::Symbol);
        assert_eq!(Script::of('！'), Script::Symbol);
        assert_eq!(Script::of('\u{3000}'), Script::Whitespace);
    }
}
