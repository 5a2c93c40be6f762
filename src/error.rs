// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A field is missing or has the wrong type.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::MalformedRequest(m) => ("malformed_request", m.as_str()),
            AppError::InvalidJson(m) => ("invalid_json", m.as_str()),
            AppError::UnsupportedMediaType(m) => ("unsupported_media_type", m.as_str()),
        };
        let body = Json(ErrorBody {
            error: code.to_string(),
            message: message.to_string(),
        });
        (self.status(), body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => AppError::MalformedRequest(text),
            JsonRejection::MissingJsonContentType(_) => AppError::UnsupportedMediaType(text),
            _ => AppError::InvalidJson(text),
        }
    }
}
