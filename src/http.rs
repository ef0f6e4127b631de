//! HTTP response building module
//!
//! Builders for the two fixed responses, decoupled from routing logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

/// Body of the default route
pub const GREETING: &str = "Hello from Azure container demo!";

/// Payload of the health endpoint
#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// Build the health-check response: 200, `application/json`,
/// `{"status":"ok"}`.
pub fn build_health_response() -> Response<Full<Bytes>> {
    let body = serde_json::to_string(&HealthStatus { status: "ok" }).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to serialize health payload: {e}"));
        r#"{"status":"ok"}"#.to_string()
    });

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(Full::new(Bytes::from(r#"{"status":"ok"}"#)))
        })
}

/// Build the default response: 200, `text/plain`, static greeting.
pub fn build_greeting_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(GREETING)))
        .unwrap_or_else(|e| {
            log_build_error("greeting", &e);
            Response::new(Full::new(Bytes::from(GREETING)))
        })
}

fn log_build_error(kind: &str, err: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {kind} response: {err}"));
}
