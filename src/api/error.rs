use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::debug;

/// Request rejected before reaching the verifier. Rendered as
/// `400 {"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON body")]
    InvalidJson(#[source] JsonRejection),
    #[error("Email is required")]
    MissingEmail,
    #[error("Invalid email length")]
    EmailTooLong { len: usize },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidJson(rejection) => debug!(error = %rejection, "rejected request body"),
            Self::EmailTooLong { len } => debug!(len, "rejected oversized email"),
            Self::MissingEmail => debug!("rejected request without email"),
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
