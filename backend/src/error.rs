//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting:
//! every failure reaches the caller as `{"error": "<message>"}` with a fixed,
//! user-facing message. Upstream detail is logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned for a missing or malformed VIN
pub const INVALID_VIN_MESSAGE: &str = "Please provide a valid 17-character VIN.";

/// Message returned when the decode service yields no make/year
pub const UNDECODABLE_VIN_MESSAGE: &str = "Could not decode this VIN. Please double-check it.";

/// Message returned for every unexpected failure
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// VIN query parameter absent or not exactly 17 characters
    #[error("Invalid VIN: {0:?}")]
    InvalidVin(Option<String>),

    /// Decode service answered but without a usable make or model year
    #[error("VIN could not be decoded: {0}")]
    VinNotDecoded(String),

    /// Any failure talking to, or interpreting, an upstream service
    #[error("Upstream failure: {0:#}")]
    Upstream(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidVin(_) => StatusCode::BAD_REQUEST,
            AppError::VinNotDecoded(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message for this error
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidVin(_) => INVALID_VIN_MESSAGE,
            AppError::VinNotDecoded(_) => UNDECODABLE_VIN_MESSAGE,
            AppError::Upstream(_) => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Upstream(e) => tracing::error!(error = ?e, "Lookup error"),
            other => tracing::debug!(error = %other, status = status.as_u16(), "Lookup rejected"),
        }

        let body = Json(json!({
            "error": self.public_message(),
        }));

        (status, body).into_response()
    }
}
