//! # Error Handling
//!
//! Unified error handling for the HRMS API. The HTTP surface distinguishes
//! exactly two outcomes: a missing record (404 with a named message) and
//! everything else (500 with a generic message). Underlying causes are
//! logged server-side and never detailed to the caller.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error payload returned by every non-2xx response: `{"error": <message>}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// HTTP status code for the response
    #[serde(skip)]
    pub status: StatusCode,
    /// Message placed in the `error` field of the body
    #[serde(rename = "error")]
    pub message: String,
}

impl ApiError {
    /// 404 for a missing record, e.g. `"Department not found"`.
    pub fn not_found(display_name: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("{display_name} not found"),
        }
    }

    /// 500 with the generic body. The cause must already have been logged by
    /// the caller or by one of the `From` conversions below.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal Server Error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, axum::Json(self)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Malformed bodies fall in the generic-failure tier, not 4xx.
        tracing::error!("Request body rejected: {rejection}");
        Self::internal()
    }
}

/// Failures surfaced by the repository layer. A missing record is not an
/// error at this level; repositories report absence with `Option`/`bool`
/// returns and handlers translate it to 404.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Payload could not be deserialized into the entity's model
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// Any database failure (constraint violation, connection loss, ...)
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[test]
    fn not_found_names_the_resource() {
        let error = ApiError::not_found("Department");

        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.message, "Department not found");
    }

    #[test]
    fn internal_never_carries_details() {
        let error = ApiError::internal();

        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "Internal Server Error");
    }

    #[test]
    fn body_is_a_single_error_field() {
        let body = serde_json::to_value(ApiError::not_found("Asset")).unwrap();

        assert_eq!(body, json!({"error": "Asset not found"}));
    }

    #[tokio::test]
    async fn response_preserves_status_and_content_type() {
        let response = ApiError::not_found("Client").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Client not found"}));
    }

    #[test]
    fn repository_errors_wrap_their_sources() {
        let payload_err: RepositoryError =
            serde_json::from_value::<i32>(json!("nope")).unwrap_err().into();
        assert!(matches!(payload_err, RepositoryError::Payload(_)));

        let db_err: RepositoryError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(db_err, RepositoryError::Database(_)));
    }
}
