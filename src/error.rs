//! Error types for the mind dump application.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Why an analysis produced no usable result.
///
/// None of these reach the user: every variant is converted into the
/// fallback result at the analysis boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The request could not be sent, or timed out.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status: {0}")]
    BadStatus(u16),

    /// The body was not the expected structure.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for AnalysisError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            AnalysisError::BadStatus(status.as_u16())
        } else if e.is_decode() {
            AnalysisError::MalformedResponse(e.to_string())
        } else {
            AnalysisError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        AnalysisError::MalformedResponse(e.to_string())
    }
}

/// A workflow transition that is not allowed from the current phase.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("no notes have been captured")]
    NoNotes,

    #[error("an analysis is already in flight")]
    AlreadyProcessing,

    #[error("a result is being shown")]
    ResultShown,

    #[error("no result is being shown")]
    NoResult,

    #[error("the share dialog is not open")]
    DialogClosed,

    #[error(transparent)]
    Share(#[from] ShareError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareError {
    #[error("contact is empty")]
    EmptyContact,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

// ============================================================================
// Relay API Errors
// ============================================================================

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("at least one non-blank note is required")]
    EmptyNotes,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::EmptyNotes => (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_NOTES"),
        };
        let body = ErrorResponse {
            error: self.to_string(),
            code,
        };
        (status, Json(body)).into_response()
    }
}
