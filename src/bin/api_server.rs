// src/bin/api_server.rs

use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use wishlist_service::infra::config::AppConfig;
use wishlist_service::infra::logging::setup_logging;
use wishlist_service::transport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = AppConfig::from_env()?;
    tracing::info!(
        wishes_file = %config.wishes_file.display(),
        reservations_file = %config.reservations_file.display(),
        "collection files configured"
    );

    let app_state = transport::http::AppState::from_config(&config);

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("API server listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
