//! The `Wish` record plus its normalization, validation and id generation rules.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use thiserror::Error;
use utoipa::ToSchema;

/// Base used for generated ids when owner and title are both blank.
const FALLBACK_ID_BASE: &str = "wish";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, ToSchema)]
pub struct Wish {
    /// Server-assigned when empty on create. Ignored in update bodies.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Normalized to lower case.
    #[serde(default)]
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("url is required")]
    MissingUrl,
    #[error("owner is required")]
    MissingOwner,
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingTitle => "title",
            ValidationError::MissingUrl => "url",
            ValidationError::MissingOwner => "owner",
        }
    }
}

impl Wish {
    /// Canonicalizes every field except `id` in place. Never rejects input.
    ///
    /// On update `id` holds the request path id and must match it exactly.
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.title);
        trim_in_place(&mut self.url);
        self.owner = self.owner.trim().to_lowercase();
        normalize_optional(&mut self.price);
        normalize_optional(&mut self.image);
        normalize_optional(&mut self.description);
    }

    /// Checks required fields; expects a normalized wish.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = [
            (self.title.is_empty(), ValidationError::MissingTitle),
            (self.url.is_empty(), ValidationError::MissingUrl),
            (self.owner.is_empty(), ValidationError::MissingOwner),
        ];
        match missing.into_iter().find(|(is_missing, _)| *is_missing) {
            Some((_, err)) => Err(err),
            None => Ok(()),
        }
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn normalize_optional(value: &mut Option<String>) {
    *value = value
        .take()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
}

/// Builds `"{owner}-{title}-{nanos}"`, lower-cased, spaces replaced with `-`.
pub fn generate_wish_id(owner: &str, title: &str) -> String {
    let joined = format!("{}-{}", owner, title);
    let mut base = joined.trim().replace(' ', "-");
    if base.is_empty() || base == "-" {
        base = FALLBACK_ID_BASE.to_string();
    }
    format!("{}-{}", base.to_lowercase(), unique_timestamp_nanos())
}

static LAST_ID_NANOS: AtomicI64 = AtomicI64::new(0);

/// Current Unix time in nanoseconds, bumped so that no two calls in this process return
/// the same value.
fn unique_timestamp_nanos() -> i64 {
    let now = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1_000);
    let mut last = LAST_ID_NANOS.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_ID_NANOS.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}
