use crate::ApiError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_json_returns_400_with_error_message() {
    let (status, json) = body_json(ApiError::invalid_json()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "Invalid JSON" }));
}

#[tokio::test]
async fn test_invalid_file_path_returns_403() {
    let (status, json) = body_json(ApiError::invalid_file_path()).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Invalid file path");
}

#[tokio::test]
async fn test_file_not_found_returns_404() {
    let (status, json) = body_json(ApiError::file_not_found()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "File not found");
}

#[tokio::test]
async fn test_internal_error_returns_500_without_location() {
    let error = ApiError::Internal {
        message: "Invalid file path".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Invalid file path" }));
}

#[test]
fn test_display_prefixes_category() {
    let error = ApiError::invalid_json();

    assert!(error.to_string().starts_with("Bad request: Invalid JSON"));
}
