use crate::app::ServiceError;
use crate::domain::Wish;
use crate::transport::http::handlers::common::invalid_json;
use crate::transport::http::types::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/wishes",
    responses(
        (status = 200, description = "All wishes in stored order", body = [Wish]),
        (status = 500, description = "Wish file unreadable or corrupt", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn list_wishes_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Wish>>, ServiceError> {
    // The lock is released once `list` returns; encoding happens outside it.
    let wishes = state.wishes.list().await?;
    Ok(Json(wishes))
}

#[utoipa::path(
    get,
    path = "/api/admin/wishes",
    responses(
        (status = 200, description = "All wishes in stored order", body = [Wish]),
        (status = 500, description = "Wish file unreadable or corrupt", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn admin_list_wishes_handler(
    state: State<AppState>,
) -> Result<Json<Vec<Wish>>, ServiceError> {
    list_wishes_handler(state).await
}

#[utoipa::path(
    post,
    path = "/api/admin/wishes",
    request_body = Wish,
    responses(
        (status = 201, description = "Wish created", body = Wish),
        (status = 400, description = "Invalid JSON, missing field or duplicate id", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Internal server error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn create_wish_handler(
    State(state): State<AppState>,
    request: Result<Json<Wish>, JsonRejection>,
) -> Result<(StatusCode, Json<Wish>), ServiceError> {
    let Json(wish) = request.map_err(invalid_json)?;
    let created = state.wishes.create(wish).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/admin/wishes/{id}",
    params(
        ("id" = String, Path, description = "Wish id; any id in the body is ignored")
    ),
    request_body = Wish,
    responses(
        (status = 200, description = "Wish updated", body = Wish),
        (status = 400, description = "Invalid id, invalid JSON or missing field", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "No wish with this id", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Internal server error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn update_wish_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<Wish>, JsonRejection>,
) -> Result<Json<Wish>, ServiceError> {
    crate::app::extract_wish_id(&id)?;
    let Json(wish) = request.map_err(invalid_json)?;
    let updated = state.wishes.update(&id, wish).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/admin/wishes/{id}",
    params(
        ("id" = String, Path, description = "Wish id")
    ),
    responses(
        (status = 204, description = "Wish deleted"),
        (status = 400, description = "Invalid id", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "No wish with this id", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Internal server error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn delete_wish_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    state.wishes.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT/DELETE on the collection path itself: the id segment is missing.
pub async fn missing_wish_id_handler() -> ServiceError {
    ServiceError::BadRequest("invalid wish id".to_string())
}
