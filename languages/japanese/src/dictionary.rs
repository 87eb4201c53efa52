use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;
use yomu_core::dictionary::{DictionaryMetadata, LexicalStore, LoadError, StoreError};

use crate::record::JmdictWord;

// Top level of a jmdict-simplified export. Words are kept as raw values so
// one malformed word does not reject the whole snapshot.
#[derive(Debug, Deserialize)]
struct JmdictJson {
    words: Vec<serde_json::Value>,
}

/// Sorted `(form, entry index)` pairs, searchable by prefix
#[derive(Debug, Default)]
struct FormIndex {
    keys: Vec<(String, usize)>,
}

impl FormIndex {
    fn build<'a, I>(forms: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        let mut keys: Vec<(String, usize)> = forms
            .into_iter()
            .filter(|(form, _)| !form.is_empty())
            .map(|(form, idx)| (form.to_string(), idx))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        Self { keys }
    }

    /// Forms starting with `prefix`, in key order
    fn prefixed<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, usize)> + 'a {
        let start = self.keys.partition_point(|(key, _)| key.as_str() < prefix);
        self.keys[start..]
            .iter()
            .take_while(move |(key, _)| key.starts_with(prefix))
            .map(|(key, idx)| (key.as_str(), *idx))
    }
}

/// In-memory JMdict with kanji and reading prefix indexes
#[derive(Debug, Default)]
pub struct Jmdict {
    entries: Vec<JmdictWord>,
    kanji_index: FormIndex,
    reading_index: FormIndex,
}

impl Jmdict {
    pub fn from_words(entries: Vec<JmdictWord>) -> Self {
        let kanji_index = FormIndex::build(
            entries
                .iter()
                .enumerate()
                .flat_map(|(idx, e)| e.kanji.iter().map(move |k| (k.text.as_str(), idx))),
        );
        let reading_index = FormIndex::build(
            entries
                .iter()
                .enumerate()
                .flat_map(|(idx, e)| e.kana.iter().map(move |k| (k.text.as_str(), idx))),
        );

        Self {
            entries,
            kanji_index,
            reading_index,
        }
    }

    /// Load from a jmdict-simplified JSON string
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: JmdictJson = serde_json::from_str(json_str)?;
        Ok(Self::from_values(data.words))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let data: JmdictJson = serde_json::from_reader(reader)?;
        Ok(Self::from_values(data.words))
    }

    fn from_values(words: Vec<serde_json::Value>) -> Self {
        let total = words.len();
        let entries: Vec<JmdictWord> = words
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<JmdictWord>(value) {
                Ok(word) => Some(word),
                Err(e) => {
                    tracing::warn!("Skipping malformed dictionary word: {e}");
                    None
                }
            })
            .collect();

        if entries.len() < total {
            tracing::warn!("Skipped {} of {} dictionary words", total - entries.len(), total);
        }

        Self::from_words(entries)
    }

    /// Get the number of entries in the dictionary
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Merge another dictionary into this one
    /// Entries from the other dictionary with the same ID replace existing ones in place
    pub fn merge(self, other: Jmdict) -> Self {
        let mut entries = self.entries;
        let mut positions: HashMap<String, usize> = entries
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.id.clone(), idx))
            .collect();

        for entry in other.entries {
            match positions.get(&entry.id) {
                Some(&idx) => entries[idx] = entry,
                None => {
                    positions.insert(entry.id.clone(), entries.len());
                    entries.push(entry);
                }
            }
        }

        Self::from_words(entries)
    }

    fn search(&self, index: &FormIndex, text: &str, limit: usize) -> Vec<JmdictWord> {
        if text.is_empty() || limit == 0 {
            return Vec::new();
        }

        // Best match per entry: (exact, matched form length in chars)
        let mut best: HashMap<usize, (bool, usize)> = HashMap::new();
        for (form, idx) in index.prefixed(text) {
            let candidate = (form == text, form.chars().count());
            best.entry(idx)
                .and_modify(|cur| {
                    if (candidate.0, std::cmp::Reverse(candidate.1)) > (cur.0, std::cmp::Reverse(cur.1)) {
                        *cur = candidate;
                    }
                })
                .or_insert(candidate);
        }

        let mut ranked: Vec<(usize, bool, usize)> = best
            .into_iter()
            .map(|(idx, (exact, len))| (idx, exact, len))
            .collect();
        ranked.sort_by_key(|&(idx, exact, len)| (!exact, !self.entries[idx].is_common(), len, idx));

        ranked
            .into_iter()
            .take(limit)
            .map(|(idx, _, _)| self.entries[idx].clone())
            .collect()
    }
}

impl LexicalStore for Jmdict {
    type Record = JmdictWord;

    /// Ranked: exact form matches, then common words, then shorter forms, then snapshot order.
    fn kanji_prefix_search(&self, text: &str, limit: usize) -> Result<Vec<JmdictWord>, StoreError> {
        Ok(self.search(&self.kanji_index, text, limit))
    }

    fn reading_prefix_search(&self, text: &str, limit: usize) -> Result<Vec<JmdictWord>, StoreError> {
        Ok(self.search(&self.reading_index, text, limit))
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "JMdict".to_string(),
            language: "ja".to_string(),
            entry_count: self.entries.len(),
        }
    }
}
