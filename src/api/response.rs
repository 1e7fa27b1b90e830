// API response utility functions module

use crate::config::Config;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build JSON response
///
/// Telemetry values change on every poll, so all JSON answers carry
/// `Cache-Control: no-store`. HEAD requests get the same headers with an
/// empty body. A serialization failure turns into a 500 whose detail is
/// only exposed in dev mode.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    is_head: bool,
    config: &Config,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            let detail = config.server.dev_mode.then(|| e.to_string());
            return http::build_500_response(detail.as_deref());
        }
    };

    let content_length = json.len();
    let payload = if is_head {
        Bytes::new()
    } else {
        Bytes::from(json)
    };

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .header("Cache-Control", "no-store")
        .header("Server", config.http.server_name.as_str());

    if config.http.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(payload)).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build response: {e}"));
        Response::new(Full::new(Bytes::from("Error")))
    })
}

/// 404 Not Found response for unknown API paths
pub fn not_found(is_head: bool, config: &Config) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Not Found",
        "available_endpoints": ["/api/voltage", "/api/alerts", "/api/status"],
    });
    json_response(StatusCode::NOT_FOUND, &body, is_head, config)
}
