// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Failure classification for calls to the PUBG API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("PUBG API rejected the API key")]
    Unauthorized,

    #[error("PUBG API rate limit hit")]
    RateLimited,

    #[error("PUBG API unreachable: {0}")]
    Unreachable(String),

    #[error("Unexpected PUBG API response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Map a non-success HTTP status to the matching error class.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        match status.as_u16() {
            404 => ApiError::NotFound(body.to_string()),
            401 | 403 => ApiError::Unauthorized,
            429 => ApiError::RateLimited,
            _ => ApiError::Unreachable(format!("HTTP {}: {}", status, body)),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Malformed(e.to_string())
        } else if e.is_timeout() {
            ApiError::Unreachable(format!("no response: {}", e))
        } else {
            ApiError::Unreachable(e.to_string())
        }
    }
}

/// Errors from the player record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request signature")]
    Unauthorized,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("PUBG API error: {0}")]
    Api(#[from] ApiError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Storage(e.to_string())
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", None),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Api(ApiError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "not_found", Some(msg.clone()))
            }
            AppError::Api(ApiError::RateLimited) => {
                (StatusCode::TOO_MANY_REQUESTS, "rate_limited", None)
            }
            AppError::Api(err) => {
                tracing::error!(error = %err, "PUBG API error");
                (StatusCode::BAD_GATEWAY, "pubg_error", None)
            }
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
