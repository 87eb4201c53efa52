use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::Request;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;
use yomu_core::preprocess::normalize_query;
use yomu_lang_japanese::lookup_phrase;
use yomu_types::{HealthStatus, LookupRequest, Morpheme, PhraseDetail};

use crate::error::ApiError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/tokenise", post(tokenise))
        .route("/api/details", post(details))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                id = %Uuid::new_v4(),
                method = %request.method(),
                uri = %request.uri(),
            )
        }))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn tokenise(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Morpheme>>, ApiError> {
    let text = read_text(&body, "Received no string to tokenise")?;

    let tokenizer = Arc::clone(&state.tokenizer);
    let morphemes = run_blocking(state.lookup_timeout, move || {
        tokenizer.tokenize(&text).map_err(anyhow::Error::from)
    })
    .await?;

    Ok(Json(morphemes))
}

async fn details(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<PhraseDetail>>, ApiError> {
    const NO_STRING: &str = "Received no string to get details of";

    let raw = read_text(&body, NO_STRING)?;
    let text = normalize_query(&raw).ok_or_else(|| ApiError::BadRequest(NO_STRING.to_string()))?;

    let store = Arc::clone(&state.store);
    let details = run_blocking(state.lookup_timeout, move || {
        lookup_phrase(&*store, &text).map_err(anyhow::Error::from)
    })
    .await?;

    Ok(Json(details))
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        entries: state.store.metadata().entry_count,
    })
}

/// Pull the `str` field out of a request body
///
/// An empty body (or JSON `null`) is 415. Anything that is not an object carrying
/// a non-blank `str` string is 400.
fn read_text(body: &Bytes, missing: &str) -> Result<String, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::UnsupportedMediaType(missing.to_string()));
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Malformed JSON body: {e}")))?;
    if value.is_null() {
        return Err(ApiError::UnsupportedMediaType(missing.to_string()));
    }
    // serde reads a derived struct from a sequence too, so `["..."]` must be refused here
    if !value.is_object() {
        return Err(ApiError::BadRequest(missing.to_string()));
    }

    let request: LookupRequest =
        serde_json::from_value(value).map_err(|_| ApiError::BadRequest(missing.to_string()))?;

    match request.text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ApiError::BadRequest(missing.to_string())),
    }
}

/// Run a collaborator call on the blocking pool, bounded by `limit`
///
/// A timeout abandons the result; the blocking call itself runs to completion.
async fn run_blocking<T, F>(limit: Duration, f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::time::timeout(limit, tokio::task::spawn_blocking(f)).await {
        Err(_) => Err(ApiError::Retrieval(anyhow!("timed out after {limit:?}"))),
        Ok(Err(join)) => Err(ApiError::Retrieval(join.into())),
        Ok(Ok(result)) => result.map_err(ApiError::Retrieval),
    }
}
