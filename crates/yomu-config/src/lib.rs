use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::server::ServerConfig;
use self::tokenizer::TokenizerConfig;

pub mod dictionary;
pub mod server;
pub mod tokenizer;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub tokenizer: TokenizerConfig,

    /// Upper bound for a single tokenizer or dictionary call
    pub lookup_timeout_ms: u64,
}

impl Config {
    /// Read configuration from the process environment
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup_timeout_ms = var("LOOKUP_TIMEOUT_MS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(5000); // 5 seconds default

        Config {
            server: ServerConfig::from_vars(&var),
            dictionary: DictionaryConfig::from_vars(&var),
            tokenizer: TokenizerConfig::from_vars(&var),

            lookup_timeout_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}
