//! Application error type mapping dispatch failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hookrelay_core::dispatch::DispatchError;
use hookrelay_types::error::AuthError;

use super::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// API-key rejection.
    Forbidden(String),
    /// Missing required request field (app_id, query).
    Validation(String),
    /// Downstream engine failure.
    Upstream(String),
    /// Middleware failure or server-side misconfiguration.
    Internal(String),
}

impl From<DispatchError> for AppError {
    fn from(e: DispatchError) -> Self {
        match e {
            DispatchError::Auth(AuthError::Invalid) => {
                AppError::Forbidden("Invalid API key".to_string())
            }
            DispatchError::Auth(AuthError::Misconfigured(msg)) => AppError::Internal(msg),
            DispatchError::MissingAppId | DispatchError::MissingQuery => {
                AppError::Validation(e.to_string())
            }
            DispatchError::Engine(e) => AppError::Upstream(e.to_string()),
            DispatchError::Middleware(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg.clone()),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = serde_json::to_string(&ApiResponse::error(code, &message)).unwrap_or_else(|_| {
            r#"{"errors":[{"code":"SERIALIZATION_ERROR","message":"Failed to serialize response"}]}"#
                .to_string()
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()
    }
}
