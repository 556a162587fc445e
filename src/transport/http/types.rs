use crate::app::{ReservationService, WishService};
use crate::infra::config::AppConfig;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::path::PathBuf;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared handler state. Each service owns its collection file and that file's lock.
#[derive(Clone)]
pub struct AppState {
    pub wishes: Arc<WishService>,
    pub reservations: Arc<ReservationService>,
}

impl AppState {
    pub fn new(wishes_file: impl Into<PathBuf>, reservations_file: impl Into<PathBuf>) -> Self {
        Self {
            wishes: Arc::new(WishService::new(wishes_file)),
            reservations: Arc::new(ReservationService::new(reservations_file)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.wishes_file, &config.reservations_file)
    }
}

/// Envelope used for error bodies and the health check.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
