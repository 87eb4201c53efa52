use serde::{Deserialize, Serialize};

/// Request body shared by `/api/tokenise` and `/api/details`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupRequest {
    #[serde(rename = "str", default)]
    pub text: Option<String>,
}

/// One dictionary entry in the shape served by `/api/details`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseDetail {
    pub slug: String,
    pub is_common: bool,
    pub tags: Vec<String>,
    /// Never populated, proficiency levels are not part of the dictionary data
    pub jlpt: Vec<String>,
    pub japanese: Vec<Japanese>,
    pub senses: Vec<Sense>,
    pub attribution: Attribution,
}

/// Written form paired with its reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Japanese {
    pub word: String,
    pub reading: String,
}

impl Japanese {
    pub fn new(word: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            reading: reading.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub english_definitions: Vec<String>,
    pub parts_of_speech: Vec<String>,
    pub links: Vec<Link>,
    pub tags: Vec<String>,
    pub restrictions: Vec<String>,
    pub see_also: Vec<String>,
    pub antonyms: Vec<String>,
    pub source: Vec<SourceLanguage>,
    pub info: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// Loanword origin, e.g. `{ "language": "ger", "word": "Arbeit" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLanguage {
    pub language: String,
    pub word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub jmdict: bool,
    pub jmnedict: bool,
    pub dbpedia: bool,
}

impl Attribution {
    /// Entry sourced from JMdict and nothing else
    pub const JMDICT: Self = Self {
        jmdict: true,
        jmnedict: false,
        dbpedia: false,
    };
}

/// Morphological token, field names follow the kuromoji IPADIC layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    pub word_type: WordType,
    /// 1-based character offset of the token in the input
    pub word_position: usize,
    pub surface_form: String,
    pub pos: String,
    pub pos_detail_1: String,
    pub pos_detail_2: String,
    pub pos_detail_3: String,
    pub conjugated_type: String,
    pub conjugated_form: String,
    pub basic_form: String,
    pub reading: String,
    pub pronunciation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WordType {
    Known,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub entries: usize,
}
