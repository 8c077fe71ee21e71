//! Response envelope and domain error mapping

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::shared::FieldError;

/// Standard API response wrapper
///
/// Success: `{"success": true, "data": {...}}`.
/// Failure: `{"success": false, "data": null, "error": "..."}`, plus
/// `details` with one entry per offending field on validation failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            details: None,
        }
    }

    pub fn validation(details: Vec<FieldError>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some("Validation failed".to_string()),
            details: Some(details),
        }
    }
}

/// `{"message": "..."}` body of the root and delete endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type ApiResult<T> =
    Result<(StatusCode, Json<ApiResponse<T>>), (StatusCode, Json<ApiResponse<T>>)>;

/// Maps a service failure onto its HTTP status and envelope.
pub fn domain_error<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    match err {
        DomainError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(err.to_string())),
        ),
        DomainError::ValidationFailed(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::validation(errors.0)),
        ),
        DomainError::Persistence(message) => {
            tracing::error!("Request failed in store: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(message)),
            )
        }
    }
}
