//! Centralized configuration (environment variables + defaults).

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_WISHES_FILE: &str = "data/wishes.private.json";
pub const DEFAULT_RESERVATIONS_FILE: &str = "data/reservations.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Path of the JSON file holding the wish list.
pub fn wishes_file() -> PathBuf {
    std::env::var("WISHES_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WISHES_FILE))
}

/// Path of the JSON file holding the reservation mapping.
pub fn reservations_file() -> PathBuf {
    std::env::var("RESERVATIONS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_RESERVATIONS_FILE))
}

/// Socket address the API server listens on.
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    raw.parse()
        .map_err(|e| anyhow::anyhow!("BIND_ADDR '{}' is not a valid socket address: {}", raw, e))
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub wishes_file: PathBuf,
    pub reservations_file: PathBuf,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Loads `.env` (if present) and then reads every setting from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self {
            wishes_file: wishes_file(),
            reservations_file: reservations_file(),
            bind_addr: bind_addr()?,
        })
    }
}
