//! Shared helpers for the HTTP integration tests.
//!
//! Each test binary only uses part of this module.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value as JsonValue;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;
use wishlist_service::{create_router, AppState};

pub struct TestApp {
    /// Keeps the data directory alive for the duration of the test.
    pub dir: TempDir,
    pub router: Router,
    pub wishes_file: PathBuf,
    pub reservations_file: PathBuf,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: JsonValue,
}

pub fn test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let wishes_file = dir.path().join("wishes.private.json");
    let reservations_file = dir.path().join("reservations.json");
    let router = create_router(AppState::new(&wishes_file, &reservations_file));
    TestApp {
        dir,
        router,
        wishes_file,
        reservations_file,
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<JsonValue>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(router, request).await
}

pub async fn send_raw(router: &Router, method: Method, uri: &str, raw: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    send_request(router, request).await
}

async fn send_request(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            JsonValue::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    TestResponse {
        status,
        content_type,
        body,
    }
}

pub fn wish_ids(body: &JsonValue) -> Vec<String> {
    body.as_array()
        .expect("wish list should be an array")
        .iter()
        .map(|w| w["id"].as_str().unwrap_or_default().to_string())
        .collect()
}
