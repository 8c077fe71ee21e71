//! JSON body extractor for Axum
//!
//! `JsonBody<T>` works like `axum::Json<T>`, but rejects malformed bodies
//! with a 400 in the standard `ApiResponse` envelope instead of axum's
//! plain-text rejection. Field rules are checked later by the service.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use super::ApiResponse;

pub struct JsonBody<T>(pub T);

/// Body could not be read as JSON of the expected shape.
pub struct JsonBodyRejection(pub JsonRejection);

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(format!("Invalid JSON: {}", self.0.body_text()));
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection)?;
        Ok(JsonBody(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
