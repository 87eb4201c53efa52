//! Router-level tests with in-memory collaborators

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use vibrato::dictionary::SystemDictionaryBuilder;
use yomu_core::dictionary::{DictionaryMetadata, LexicalStore, SearchAxis, StoreError};
use yomu_core::language::{MorphemeTokenizer, TokenizeError};
use yomu_lang_japanese::{Jmdict, JmdictWord, VibratoTokenizer};
use yomu_types::Morpheme;

use crate::{AppState, router};


const SNAPSHOT: &str = r#"{ "words": [
    {
        "id": "1358280",
        "kanji": [{ "common": true, "text": "食べる", "tags": [] }, { "common": false, "text": "喰べる", "tags": ["iK"] }],
        "kana": [{ "common": true, "text": "たべる", "tags": [], "appliesToKanji": ["*"] }],
        "sense": [
            { "partOfSpeech": ["v1", "vt"], "gloss": [{ "lang": "eng", "text": "to eat" }] },
            { "partOfSpeech": ["v1", "vt"], "gloss": [{ "lang": "eng", "text": "to live on (e.g. a salary)" }] }
        ]
    },
    {
        "id": "1358300",
        "kanji": [{ "common": true, "text": "食べ物", "tags": [] }],
        "kana": [{ "common": true, "text": "たべもの", "tags": [] }],
        "sense": [{ "partOfSpeech": ["n"], "gloss": [{ "lang": "eng", "text": "food" }] }]
    },
    {
        "id": "1000430",
        "kana": [{ "common": true, "text": "たばこ", "tags": [] }],
        "sense": [{ "partOfSpeech": ["n"], "gloss": [{ "lang": "eng", "text": "tobacco" }] }]
    }
] }"#;

/// Wraps a store and records which search axes were hit
struct SpyStore<S> {
    inner: S,
    calls: Arc<Mutex<Vec<SearchAxis>>>,
}

impl<S> LexicalStore for SpyStore<S>
where
    S: LexicalStore<Record = JmdictWord>,
{
    type Record = JmdictWord;

    fn kanji_prefix_search(&self, text: &str, limit: usize) -> Result<Vec<JmdictWord>, StoreError> {
        self.calls.lock().unwrap().push(SearchAxis::KanjiPrefix);
        self.inner.kanji_prefix_search(text, limit)
    }

    fn reading_prefix_search(&self, text: &str, limit: usize) -> Result<Vec<JmdictWord>, StoreError> {
        self.calls.lock().unwrap().push(SearchAxis::ReadingPrefix);
        self.inner.reading_prefix_search(text, limit)
    }

    fn metadata(&self) -> DictionaryMetadata {
        self.inner.metadata()
    }
}

/// Store that always fails, or stalls past any test timeout
enum BrokenStore {
    Failing,
    Stalled,
}

impl BrokenStore {
    fn respond(&self) -> Result<Vec<JmdictWord>, StoreError> {
        match self {
            BrokenStore::Failing => Err(StoreError::Unavailable("connection refused at 10.0.0.7".into())),
            BrokenStore::Stalled => {
                std::thread::sleep(Duration::from_millis(300));
                Ok(Vec::new())
            }
        }
    }
}

impl LexicalStore for BrokenStore {
    type Record = JmdictWord;

    fn kanji_prefix_search(&self, _: &str, _: usize) -> Result<Vec<JmdictWord>, StoreError> {
        self.respond()
    }

    fn reading_prefix_search(&self, _: &str, _: usize) -> Result<Vec<JmdictWord>, StoreError> {
        self.respond()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "broken".into(),
            language: "ja".into(),
            entry_count: 0,
        }
    }
}

struct FailingTokenizer;

impl MorphemeTokenizer for FailingTokenizer {
    fn tokenize(&self, _: &str) -> Result<Vec<Morpheme>, TokenizeError> {
        Err(TokenizeError::Failed("lattice exploded".into()))
    }
}

fn tiny_tokenizer() -> VibratoTokenizer {
    let lexicon_csv = "東京,0,0,1,名詞,固有名詞,地域,一般,*,*,東京,トウキョウ,トーキョー
京都,0,0,1,名詞,固有名詞,地域,一般,*,*,京都,キョウト,キョート
都,0,0,1,名詞,接尾,地域,*,*,*,都,ト,ト";
    let matrix_def = "1 1\n0 0 0";
    let char_def = "DEFAULT 0 1 0";
    let unk_def = "DEFAULT,0,0,100,*";

    let dict = SystemDictionaryBuilder::from_readers(
        lexicon_csv.as_bytes(),
        matrix_def.as_bytes(),
        char_def.as_bytes(),
        unk_def.as_bytes(),
    )
    .unwrap();

    VibratoTokenizer::new(dict)
}

struct TestApp {
    router: Router,
    calls: Arc<Mutex<Vec<SearchAxis>>>,
}

fn app() -> TestApp {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let store = SpyStore {
        inner: Jmdict::from_json(SNAPSHOT).unwrap(),
        calls: Arc::clone(&calls),
    };
    let state = AppState::new(Arc::new(store), Arc::new(tiny_tokenizer()), Duration::from_secs(5));

    TestApp {
        router: router(state),
        calls,
    }
}

fn app_with(store: impl LexicalStore<Record = JmdictWord> + 'static, tokenizer: impl MorphemeTokenizer + 'static) -> Router {
    router(AppState::new(Arc::new(store), Arc::new(tokenizer), Duration::from_millis(50)))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
