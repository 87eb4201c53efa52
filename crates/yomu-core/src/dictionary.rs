use std::fmt;

/// Prefix-searchable dictionary backing `/api/details`
///
/// Implementations own result ranking. Callers treat the returned order as final.
pub trait LexicalStore: Send + Sync {
    type Record;

    /// Entries with a written (kanji) form starting with `text`
    fn kanji_prefix_search(&self, text: &str, limit: usize) -> Result<Vec<Self::Record>, StoreError>;

    /// Entries with a kana reading starting with `text`
    fn reading_prefix_search(&self, text: &str, limit: usize) -> Result<Vec<Self::Record>, StoreError>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Which index a prefix search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAxis {
    KanjiPrefix,
    ReadingPrefix,
}

impl fmt::Display for SearchAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAxis::KanjiPrefix => f.write_str("kanji-prefix"),
            SearchAxis::ReadingPrefix => f.write_str("reading-prefix"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Dictionary unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
