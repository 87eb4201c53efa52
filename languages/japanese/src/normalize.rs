use yomu_types::{Attribution, Japanese, PhraseDetail, Sense, SourceLanguage};

use crate::record::{Gloss, JmdictWord, SenseGroup, Xref};

/// Pair written forms with readings by position
///
/// Written form `i` takes reading `i`, or reading 0 when there are fewer
/// readings than written forms, or `""` when there are none at all. A word
/// with no written forms lists each reading paired with itself.
///
/// Reading 0 is only a guess for written forms past the end of the reading
/// list; it is kept because existing clients already display it.
pub fn pair_forms(written: &[&str], readings: &[&str]) -> Vec<Japanese> {
    if written.is_empty() {
        return readings.iter().map(|r| Japanese::new(*r, *r)).collect();
    }

    let fallback = readings.first().copied().unwrap_or_default();
    written
        .iter()
        .enumerate()
        .map(|(i, word)| Japanese::new(*word, readings.get(i).copied().unwrap_or(fallback)))
        .collect()
}

/// Map a dictionary word onto the response shape
pub fn normalize(word: &JmdictWord) -> PhraseDetail {
    let written: Vec<&str> = word.kanji.iter().map(|k| k.text.as_str()).collect();
    let readings: Vec<&str> = word.kana.iter().map(|k| k.text.as_str()).collect();

    PhraseDetail {
        slug: word.id.clone(),
        is_common: word.is_common(),
        tags: word.kanji.iter().flat_map(|k| k.tags.iter().cloned()).collect(),
        jlpt: Vec::new(),
        japanese: pair_forms(&written, &readings),
        senses: word.sense.iter().map(normalize_sense).collect(),
        attribution: Attribution::JMDICT,
    }
}

fn normalize_sense(sense: &SenseGroup) -> Sense {
    Sense {
        english_definitions: sense.gloss.iter().map(Gloss::text).map(str::to_string).collect(),
        parts_of_speech: sense.part_of_speech.clone(),
        links: Vec::new(),
        tags: sense.misc.clone(),
        restrictions: sense
            .applies_to_kanji
            .iter()
            .chain(&sense.applies_to_kana)
            .filter(|r| r.as_str() != "*")
            .cloned()
            .collect(),
        see_also: render_refs(&sense.related),
        antonyms: render_refs(&sense.antonym),
        source: sense
            .language_source
            .iter()
            .map(|src| SourceLanguage {
                language: src.lang.clone(),
                word: src.text.clone(),
            })
            .collect(),
        info: sense.info.clone(),
    }
}

fn render_refs(refs: &[Xref]) -> Vec<String> {
    refs.iter().map(Xref::display).collect()
}
