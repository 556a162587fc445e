use crate::domain::Wish;
use crate::transport::http::handlers::common::method_not_allowed_handler;
use crate::transport::http::handlers::{health, reservations, wishes};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::routing::{get, put};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        wishes::list_wishes_handler,
        wishes::admin_list_wishes_handler,
        wishes::create_wish_handler,
        wishes::update_wish_handler,
        wishes::delete_wish_handler,
        reservations::get_reservations_handler,
        reservations::replace_reservations_handler
    ),
    components(schemas(Wish, ApiResponse))
)]
pub struct ApiDoc;

/// Builds the API router. Every API path answers unsupported methods with a JSON 405.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/wishes",
            get(wishes::list_wishes_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/api/wishes/",
            get(wishes::list_wishes_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/api/admin/wishes",
            get(wishes::admin_list_wishes_handler)
                .post(wishes::create_wish_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/api/admin/wishes/",
            get(wishes::admin_list_wishes_handler)
                .post(wishes::create_wish_handler)
                .put(wishes::missing_wish_id_handler)
                .delete(wishes::missing_wish_id_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/api/admin/wishes/*id",
            put(wishes::update_wish_handler)
                .delete(wishes::delete_wish_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/api/reservation",
            get(reservations::get_reservations_handler)
                .post(reservations::replace_reservations_handler)
                .fallback(method_not_allowed_handler),
        )
        .with_state(app_state)
}
