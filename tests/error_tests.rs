// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use pubg_stats_bot::error::{ApiError, AppError, StoreError};

#[test]
fn test_api_errors_map_to_http_status() {
    let response = AppError::Api(ApiError::NotFound("player x".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = AppError::Api(ApiError::RateLimited).into_response();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = AppError::Api(ApiError::Unreachable("timeout".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_store_error_becomes_storage_error() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let err = AppError::from(StoreError::from(io));

    assert!(matches!(err, AppError::Storage(ref msg) if msg.contains("read-only")));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_unauthorized_signature() {
    let response = AppError::Unauthorized.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
