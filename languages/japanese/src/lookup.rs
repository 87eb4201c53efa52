use yomu_core::dictionary::{LexicalStore, StoreError};
use yomu_types::PhraseDetail;

use crate::normalize::normalize;
use crate::record::JmdictWord;
use crate::search::plan;

/// Normalize every word, keeping the store's order and length
pub fn aggregate(words: &[JmdictWord]) -> Vec<PhraseDetail> {
    words.iter().map(normalize).collect()
}

/// Resolve a phrase to dictionary details: classify, search, normalize
///
/// Synchronous and CPU bound apart from the store call. Callers running on
/// an async runtime should move it onto a blocking thread.
pub fn lookup_phrase<S>(store: &S, text: &str) -> Result<Vec<PhraseDetail>, StoreError>
where
    S: LexicalStore<Record = JmdictWord> + ?Sized,
{
    let query = plan(text);
    tracing::debug!(axis = %query.axis, text = %query.text, limit = query.limit, "Dictionary query");

    let words = query.execute(store)?;
    tracing::debug!(found = words.len(), "Dictionary query finished");

    Ok(aggregate(&words))
}
