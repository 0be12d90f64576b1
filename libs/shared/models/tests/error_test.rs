use axum::{http::StatusCode, response::IntoResponse};
use serde_json::Value;

use shared_models::error::AppError;

#[test]
fn test_status_and_code_mapping() {
    let cases = [
        (AppError::NotFound("x".into()), StatusCode::NOT_FOUND, "not_found"),
        (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST, "bad_request"),
        (AppError::ValidationError("x".into()), StatusCode::BAD_REQUEST, "validation_error"),
        (AppError::Conflict("x".into()), StatusCode::CONFLICT, "conflict"),
    ];

    for (error, status, code) in cases {
        assert_eq!(error.status(), status);
        assert_eq!(error.code(), code);
    }
}

#[tokio::test]
async fn test_response_body_carries_message_and_code() {
    let response = AppError::Conflict("Time slot already booked".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Time slot already booked");
    assert_eq!(json["code"], "conflict");
}
