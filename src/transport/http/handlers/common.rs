use crate::app::ServiceError;
use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub fn error_response(status: StatusCode, body: ApiResponse) -> (StatusCode, Json<ApiResponse>) {
    (status, Json(body))
}

/// Maps a rejected request body to a 400. The rejection detail is only logged.
pub fn invalid_json(rejection: JsonRejection) -> ServiceError {
    tracing::debug!(error = %rejection, "rejected request body");
    ServiceError::BadRequest("invalid JSON payload".to_string())
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServiceError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ApiResponse::failure(message))
            }
            ServiceError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ApiResponse {
                    success: false,
                    data: Some(serde_json::json!({ "field": err.field() })),
                    error: Some(err.to_string()),
                },
            ),
            ServiceError::NotFound(message) => (StatusCode::NOT_FOUND, ApiResponse::failure(message)),
            // Store errors carry file paths; keep them out of the response.
            ServiceError::Store(err) => {
                tracing::error!(error = %err, "collection store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure("internal storage error"),
                )
            }
        };
        error_response(status, body).into_response()
    }
}

/// Fallback for methods an API route does not support.
pub async fn method_not_allowed_handler() -> impl IntoResponse {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ApiResponse::failure("method not allowed"),
    )
}
