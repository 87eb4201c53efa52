use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use yomu_config::Config;
use yomu_core::dictionary::LexicalStore;
use yomu_core::language::MorphemeTokenizer;
use yomu_lang_japanese::{JmdictLoader, JmdictWord, VibratoTokenizer};

pub type SharedStore = Arc<dyn LexicalStore<Record = JmdictWord>>;
pub type SharedTokenizer = Arc<dyn MorphemeTokenizer>;

/// Long-lived handles shared by every request
///
/// Built once before the listener binds and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub tokenizer: SharedTokenizer,
    pub lookup_timeout: Duration,
}

impl AppState {
    pub fn new(store: SharedStore, tokenizer: SharedTokenizer, lookup_timeout: Duration) -> Self {
        Self {
            store,
            tokenizer,
            lookup_timeout,
        }
    }

    /// Load the dictionary and tokenizer named by `config`
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = JmdictLoader::load_with_extras(
            Path::new(&config.dictionary.path),
            &config.dictionary.extra_paths,
        )
        .with_context(|| format!("failed to load dictionary {}", config.dictionary.path))?;

        let tokenizer = VibratoTokenizer::from_path(Path::new(&config.tokenizer.dict_path))
            .with_context(|| format!("failed to load tokenizer {}", config.tokenizer.dict_path))?;
        tracing::info!("Obtained tokenizer");

        Ok(Self::new(
            Arc::new(store),
            Arc::new(tokenizer),
            Duration::from_millis(config.lookup_timeout_ms),
        ))
    }
}
