//! Request routing dispatch module
//!
//! Maps an inbound request's target to one of the two fixed responses.
//! Stateless: a pure function of the request-target, no state across calls.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;

use crate::http;

/// Request-target that selects the health-check response
const HEALTH_TARGET: &str = "/health";

/// Main entry point for HTTP request handling.
///
/// Total: every request gets exactly one 200 response. The method is never
/// inspected. Generic over the body type so tests can drive it without a
/// live connection.
pub async fn handle_request<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(route(request_target(&req)))
}

/// Raw request-target: path plus query string, no normalization.
fn request_target<B>(req: &Request<B>) -> &str {
    req.uri().path_and_query().map_or("/", |pq| pq.as_str())
}

/// Route a request-target to a response.
///
/// Only a byte-exact `/health` takes the health route. Trailing slashes,
/// different case, and query strings all fall through to the greeting.
fn route(target: &str) -> Response<Full<Bytes>> {
    if target == HEALTH_TARGET {
        http::build_health_response()
    } else {
        http::build_greeting_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::Method;

    fn request(method: Method, target: &str) -> Request<()> {
        Request::builder()
            .method(method)
            .uri(target)
            .body(())
            .unwrap()
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_get_health() {
        let resp = handle_request(request(Method::GET, "/health")).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_method_is_irrelevant() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::HEAD] {
            let resp = handle_request(request(method.clone(), "/health"))
                .await
                .unwrap();
            assert_eq!(resp.status(), 200, "method: {method}");
            assert_eq!(resp.headers()["Content-Type"], "application/json");
        }
    }

    #[tokio::test]
    async fn test_root_gets_greeting() {
        let resp = handle_request(request(Method::GET, "/")).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
        assert_eq!(&body_bytes(resp).await[..], http::GREETING.as_bytes());
    }

    #[tokio::test]
    async fn test_unknown_path_gets_greeting() {
        let resp = handle_request(request(Method::GET, "/unknown/path"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(&body_bytes(resp).await[..], http::GREETING.as_bytes());
    }

    #[tokio::test]
    async fn test_near_misses_take_default_route() {
        // No normalization: exact-match only
        for target in ["/health/", "/Health", "/health?x=1", "/healthz"] {
            let resp = handle_request(request(Method::GET, target)).await.unwrap();
            assert_eq!(resp.status(), 200, "target: {target}");
            assert_eq!(
                resp.headers()["Content-Type"],
                "text/plain",
                "target: {target}"
            );
            assert_eq!(&body_bytes(resp).await[..], http::GREETING.as_bytes());
        }
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        let first = handle_request(request(Method::GET, "/health")).await.unwrap();
        let second = handle_request(request(Method::GET, "/health")).await.unwrap();
        assert_eq!(first.status(), second.status());
        assert_eq!(first.headers(), second.headers());
        assert_eq!(body_bytes(first).await, body_bytes(second).await);
    }
}
