use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Compiled vibrato system dictionary, zstd-compressed when it ends in `.zst`
    pub dict_path: String,
}

impl TokenizerConfig {
    pub fn from_vars<F>(var: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dict_path = var("TOKENIZER_DICT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "./dict/system.dic.zst".to_string());

        Self { dict_path }
    }
}
