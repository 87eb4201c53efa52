use unicode_normalization::UnicodeNormalization;

/// Normalize a dictionary query
///
/// Returns `None` for blank input. Half-width katakana and full-width
/// ASCII are folded by NFKC so they hit the same index keys as the
/// dictionary's own forms.
pub fn normalize_query(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let text: String = text
        .nfkc()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect();
    let text = text.trim();

    (!text.is_empty()).then(|| text.to_string())
}
