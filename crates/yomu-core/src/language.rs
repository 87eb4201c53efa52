use yomu_types::Morpheme;

/// Morphological analyzer behind `/api/tokenise`
///
/// Output is relayed to clients as-is, so implementations must return
/// morphemes whose surface forms concatenate back to the input.
pub trait MorphemeTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>, TokenizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("Tokenizer failed: {0}")]
    Failed(String),

    #[error("Failed to load tokenizer dictionary: {0}")]
    Load(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
