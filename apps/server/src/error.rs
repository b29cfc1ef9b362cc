use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use btcquote_core::FetchError;
use serde::Serialize;
use thiserror::Error;

/// Client-visible request failures.
///
/// The three error classes callers can hit are kept distinguishable by
/// message prefix; provider-level diagnostics never surface here.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    MalformedRequest(String),
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("{0}")]
    Upstream(#[from] FetchError),
    #[error("Not found")]
    NotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Serialize)]
struct ErrorMessage {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MalformedRequest(_) | ApiError::UnknownTool(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(FetchError::AllProvidersFailed) => StatusCode::BAD_GATEWAY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorBody {
            error: ErrorMessage {
                message: self.to_string(),
            },
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
