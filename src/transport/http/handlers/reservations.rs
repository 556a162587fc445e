use crate::app::ServiceError;
use crate::domain::Reservations;
use crate::transport::http::handlers::common::invalid_json;
use crate::transport::http::types::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/reservation",
    responses(
        (status = 200, description = "Wish id to reserver mapping", body = std::collections::BTreeMap<String, String>),
        (status = 500, description = "Reservation file unreadable or corrupt", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn get_reservations_handler(
    State(state): State<AppState>,
) -> Result<Json<Reservations>, ServiceError> {
    let reservations = state.reservations.get().await?;
    Ok(Json(reservations))
}

#[utoipa::path(
    post,
    path = "/api/reservation",
    request_body = std::collections::BTreeMap<String, String>,
    responses(
        (status = 200, description = "Mapping replaced; echoes the stored mapping", body = std::collections::BTreeMap<String, String>),
        (status = 400, description = "Invalid JSON payload", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Internal server error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn replace_reservations_handler(
    State(state): State<AppState>,
    request: Result<Json<Reservations>, JsonRejection>,
) -> Result<Json<Reservations>, ServiceError> {
    let Json(reservations) = request.map_err(invalid_json)?;
    let stored = state.reservations.replace(reservations).await?;
    Ok(Json(stored))
}
