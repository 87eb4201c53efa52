use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use vibrato::dictionary::LexType;
use vibrato::{Dictionary, Tokenizer};
use yomu_core::language::{MorphemeTokenizer, TokenizeError};
use yomu_types::{Morpheme, WordType};

/// Morphological analyzer backed by a vibrato system dictionary
///
/// Feature strings are expected in IPADIC column order. The tokenizer is
/// shared read-only; each call allocates its own worker.
pub struct VibratoTokenizer {
    inner: Tokenizer,
}

impl VibratoTokenizer {
    pub fn new(dict: Dictionary) -> Self {
        Self {
            inner: Tokenizer::new(dict),
        }
    }

    /// Load a compiled dictionary, decoding zstd when the file ends in `.zst`
    pub fn from_path(path: &Path) -> Result<Self, TokenizeError> {
        tracing::info!("Loading tokenizer dictionary from: {}", path.display());
        let file = File::open(path)?;

        let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "zst") {
            Box::new(zstd::Decoder::new(file)?)
        } else {
            Box::new(BufReader::new(file))
        };

        let dict = Dictionary::read(reader).map_err(|e| TokenizeError::Load(e.to_string()))?;
        tracing::info!("Tokenizer dictionary loaded");
        Ok(Self::new(dict))
    }
}

impl MorphemeTokenizer for VibratoTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>, TokenizeError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let mut worker = self.inner.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();

        let morphemes = worker
            .token_iter()
            .map(|token| {
                let word_type = match token.lex_type() {
                    LexType::Unknown => WordType::Unknown,
                    _ => WordType::Known,
                };
                morpheme_from_ipadic(
                    token.surface(),
                    token.feature(),
                    token.range_char().start + 1,
                    word_type,
                )
            })
            .collect();

        Ok(morphemes)
    }
}

/// Spread an IPADIC feature row over the morpheme fields
///
/// Rows are `pos,pos1,pos2,pos3,conj_type,conj_form,base,reading,pronunciation`.
/// Short rows (typical for unknown words) leave the remaining fields as `*`.
pub fn morpheme_from_ipadic(
    surface: &str,
    feature: &str,
    word_position: usize,
    word_type: WordType,
) -> Morpheme {
    let mut cols = feature.split(',').map(str::trim);
    let mut next = || cols.next().filter(|c| !c.is_empty()).unwrap_or("*").to_string();

    Morpheme {
        word_type,
        word_position,
        surface_form: surface.to_string(),
        pos: next(),
        pos_detail_1: next(),
        pos_detail_2: next(),
        pos_detail_3: next(),
        conjugated_type: next(),
        conjugated_form: next(),
        basic_form: next(),
        reading: next(),
        pronunciation: next(),
    }
}
