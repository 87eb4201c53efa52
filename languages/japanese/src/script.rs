/// Script class of a query, decides which index it is searched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Contains at least one CJK ideograph
    KanjiBearing,
    /// Anything else, including the empty string
    KanaOnly,
}

/// CJK Unified Ideographs (U+4E00..=U+9FAF) or Extension A (U+3400..=U+4DBF)
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FAF}' | '\u{3400}'..='\u{4DBF}')
}

pub fn classify(text: &str) -> Script {
    if text.chars().any(is_kanji) {
        Script::KanjiBearing
    } else {
        Script::KanaOnly
    }
}
