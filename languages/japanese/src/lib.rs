pub mod dictionary;
pub mod loader;
pub mod lookup;
pub mod normalize;
pub mod record;
pub mod script;
pub mod search;
pub mod tokenizer;

pub use dictionary::Jmdict;
pub use loader::JmdictLoader;
pub use lookup::{aggregate, lookup_phrase};
pub use normalize::{normalize, pair_forms};
pub use record::JmdictWord;
pub use script::{Script, classify};
pub use search::{ExternalQuery, RESULT_LIMIT, plan, select};
pub use tokenizer::VibratoTokenizer;
