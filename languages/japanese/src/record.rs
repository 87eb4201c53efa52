//! Word records in the jmdict-simplified JSON layout.
//!
//! Every field except `id` may be absent or `null` in a snapshot; both read
//! as the empty value so downstream mapping never has to special-case them.

use serde::{Deserialize, Deserializer};

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

fn string_or_number<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(de)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// One JMdict word as stored in a snapshot
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JmdictWord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kanji: Vec<KanjiForm>,
    #[serde(deserialize_with = "null_as_default")]
    pub kana: Vec<KanaForm>,
    #[serde(deserialize_with = "null_as_default")]
    pub sense: Vec<SenseGroup>,
}

impl JmdictWord {
    /// True if any written or kana form is marked common
    pub fn is_common(&self) -> bool {
        self.kanji.iter().any(|k| k.common) || self.kana.iter().any(|k| k.common)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KanjiForm {
    #[serde(deserialize_with = "null_as_default")]
    pub common: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KanaForm {
    #[serde(deserialize_with = "null_as_default")]
    pub common: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub applies_to_kanji: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SenseGroup {
    #[serde(deserialize_with = "null_as_default")]
    pub part_of_speech: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub applies_to_kanji: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub applies_to_kana: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub related: Vec<Xref>,
    #[serde(deserialize_with = "null_as_default")]
    pub antonym: Vec<Xref>,
    #[serde(deserialize_with = "null_as_default")]
    pub field: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub dialect: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub misc: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub info: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub language_source: Vec<LanguageSource>,
    #[serde(deserialize_with = "null_as_default")]
    pub gloss: Vec<Gloss>,
}

/// Cross reference such as `["丸", "まる", 1]`
///
/// The layout is positional and loosely typed: any of `[text]`,
/// `[text, reading]`, `[text, sense]` or `[text, reading, sense]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Xref(pub Vec<XrefPart>);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum XrefPart {
    Text(String),
    Sense(u32),
}

impl Xref {
    /// Render as `text 【reading】 (sense N)`, omitting absent parts
    pub fn display(&self) -> String {
        let mut texts = self.0.iter().filter_map(|p| match p {
            XrefPart::Text(t) => Some(t.as_str()),
            XrefPart::Sense(_) => None,
        });
        let sense = self.0.iter().find_map(|p| match p {
            XrefPart::Sense(n) => Some(*n),
            XrefPart::Text(_) => None,
        });

        let mut out = texts.next().unwrap_or_default().to_string();
        if let Some(reading) = texts.next() {
            out.push_str(&format!(" 【{reading}】"));
        }
        if let Some(n) = sense {
            out.push_str(&format!(" (sense {n})"));
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LanguageSource {
    #[serde(deserialize_with = "null_as_default")]
    pub lang: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

/// Gloss, either bare text or `{ "lang": "eng", "text": "to eat" }`; the language tag is ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Gloss {
    Plain(String),
    Tagged {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
    },
}

impl Gloss {
    pub fn text(&self) -> &str {
        match self {
            Gloss::Plain(text) | Gloss::Tagged { text } => text,
        }
    }
}
