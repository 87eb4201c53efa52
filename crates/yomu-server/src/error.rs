use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use yomu_types::ErrorBody;

/// Body sent for every failure that is not the client's fault
pub const GENERIC_ERROR: &str = "Something went wrong!";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No request body at all
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Body present but unusable
    #[error("{0}")]
    BadRequest(String),

    /// Tokenizer or dictionary failed or timed out
    #[error("Retrieval failed: {0:#}")]
    Retrieval(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Retrieval(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::UnsupportedMediaType(msg) | ApiError::BadRequest(msg) => {
                tracing::debug!(%status, "Rejected request: {msg}");
                msg
            }
            ApiError::Retrieval(e) => {
                // cause stays in the log, clients only get the generic message
                tracing::error!("Request failed: {e:#}");
                GENERIC_ERROR.to_string()
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
