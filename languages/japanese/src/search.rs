use yomu_core::dictionary::{LexicalStore, SearchAxis, StoreError};

use crate::script::{Script, classify};

/// Maximum entries returned for one `/api/details` query
pub const RESULT_LIMIT: usize = 5;

/// A prefix search chosen for a query, not yet run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalQuery {
    pub axis: SearchAxis,
    pub text: String,
    pub limit: usize,
}

impl ExternalQuery {
    /// Run against a store. Store failures are returned as-is, never retried.
    pub fn execute<S>(&self, store: &S) -> Result<Vec<S::Record>, StoreError>
    where
        S: LexicalStore + ?Sized,
    {
        match self.axis {
            SearchAxis::KanjiPrefix => store.kanji_prefix_search(&self.text, self.limit),
            SearchAxis::ReadingPrefix => store.reading_prefix_search(&self.text, self.limit),
        }
    }
}

/// Kanji substrings narrow results far better than kana ones, so a query
/// containing any kanji searches written forms and anything else searches
/// readings.
pub fn select(text: &str, script: Script) -> ExternalQuery {
    let axis = match script {
        Script::KanjiBearing => SearchAxis::KanjiPrefix,
        Script::KanaOnly => SearchAxis::ReadingPrefix,
    };

    ExternalQuery {
        axis,
        text: text.to_string(),
        limit: RESULT_LIMIT,
    }
}

/// Classify then select
pub fn plan(text: &str) -> ExternalQuery {
    select(text, classify(text))
}
