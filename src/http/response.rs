//! HTTP response building
//!
//! Builders for the status-code responses shared by the static and API
//! sides, decoupled from any routing logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build 500 Internal Server Error response
///
/// `detail` is only attached when the server runs with `dev_mode` on;
/// production responses stay opaque.
pub fn build_500_response(detail: Option<&str>) -> Response<Full<Bytes>> {
    let body = detail.map_or_else(
        || r#"{"error":"Internal server error"}"#.to_string(),
        |message| {
            serde_json::json!({
                "error": "Internal server error",
                "detail": message,
            })
            .to_string()
        },
    );

    Response::builder()
        .status(500)
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-store")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("Internal Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_codes() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_405_response().status(), 405);
        assert_eq!(build_413_response().status(), 413);
        assert_eq!(build_304_response("\"abc\"").status(), 304);
        assert_eq!(build_500_response(None).status(), 500);
    }

    #[test]
    fn test_405_advertises_allowed_methods() {
        let resp = build_405_response();
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_options_cors_toggle() {
        let with_cors = build_options_response(true);
        assert_eq!(with_cors.status(), 204);
        assert_eq!(with_cors.headers()["Access-Control-Allow-Origin"], "*");

        let without_cors = build_options_response(false);
        assert!(!without_cors
            .headers()
            .contains_key("Access-Control-Allow-Origin"));
    }

    #[test]
    fn test_304_carries_etag() {
        let resp = build_304_response("\"deadbeef\"");
        assert_eq!(resp.headers()["ETag"], "\"deadbeef\"");
    }

    #[tokio::test]
    async fn test_500_detail_gated() {
        let opaque = build_500_response(None);
        assert_eq!(opaque.headers()["Content-Type"], "application/json");
        let body: serde_json::Value =
            serde_json::from_slice(&opaque.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("detail").is_none());

        let verbose = build_500_response(Some("rng lock poisoned"));
        assert_eq!(verbose.status(), 500);
        let body: serde_json::Value =
            serde_json::from_slice(&verbose.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["detail"], "rng lock poisoned");
    }
}
