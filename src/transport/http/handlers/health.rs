use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Both collection files are readable", body = ApiResponse),
        (status = 503, description = "A collection file is unreadable or corrupt", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let wishes = state.wishes.list().await;
    let reservations = state.reservations.get().await;

    match (wishes, reservations) {
        (Ok(wishes), Ok(reservations)) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({
                "status": "ok",
                "wishes": wishes.len(),
                "reservations": reservations.len()
            }))),
        )
            .into_response(),
        (wishes, reservations) => {
            if let Err(e) = &wishes {
                tracing::warn!(
                    path = %state.wishes.path().display(),
                    error = %e,
                    "health check: wish collection unavailable"
                );
            }
            if let Err(e) = &reservations {
                tracing::warn!(
                    path = %state.reservations.path().display(),
                    error = %e,
                    "health check: reservation collection unavailable"
                );
            }
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    success: false,
                    data: Some(serde_json::json!({
                        "status": "unhealthy",
                        "wishes": wishes.is_ok(),
                        "reservations": reservations.is_ok()
                    })),
                    error: Some("collection storage unavailable".to_string()),
                }),
            )
                .into_response()
        }
    }
}
