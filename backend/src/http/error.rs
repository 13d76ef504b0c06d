//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Calculator input error
    Calc(CalcError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", msg),
            ),
            AppError::Calc(e) => {
                let code = match e {
                    CalcError::MissingAgeBracket => "MISSING_AGE_BRACKET",
                    CalcError::UnknownAgeBracket(_) => "UNKNOWN_AGE_BRACKET",
                    CalcError::Config(_) => "CONFIG_ERROR",
                    _ => "INVALID_INPUT",
                };
                let status = match e {
                    CalcError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::BAD_REQUEST,
                };
                let error = match &e {
                    CalcError::UnknownAgeBracket(_) => ApiError::new(code, e.to_string())
                        .with_details("Use an id from GET /v1/age-brackets or a label such as '18-25 Years'"),
                    _ => ApiError::new(code, e.to_string()),
                };
                (status, error)
            }
        };

        tracing::debug!(status = %status, code = %error.code, "request failed");
        (status, Json(error)).into_response()
    }
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        AppError::Calc(err)
    }
}
