//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method screening, body size
//! limits, then dispatch to the telemetry API or the static webroot.

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    let access_log = state.config.access_log_enabled();
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Check body size
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 3. Log headers if enabled
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // 4. Extract caching headers and dispatch
    let ctx = RequestContext {
        path,
        is_head,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        access_log,
    };

    let response = if ctx.path.starts_with("/api/") {
        api::handle_api_request(ctx.path, ctx.is_head, &state).await
    } else {
        static_files::serve_asset(&ctx, &state.config).await
    };

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_head_pass_screening() {
        assert!(check_http_method(&Method::GET, false).is_none());
        assert!(check_http_method(&Method::HEAD, false).is_none());
    }

    #[test]
    fn test_options_answers_preflight() {
        let resp = check_http_method(&Method::OPTIONS, false).unwrap();
        assert_eq!(resp.status(), 204);

        let cors = check_http_method(&Method::OPTIONS, true).unwrap();
        assert_eq!(cors.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn test_write_methods_rejected() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let resp = check_http_method(&method, false).unwrap();
            assert_eq!(resp.status(), 405);
            assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
        }
    }

    fn request_with_length(value: &str) -> Request<()> {
        Request::builder()
            .uri("/api/voltage")
            .header("content-length", value)
            .body(())
            .unwrap()
    }

    #[test]
    fn test_oversized_body_rejected() {
        let req = request_with_length("2000000");
        let resp = check_body_size(&req, 1_048_576).unwrap();
        assert_eq!(resp.status(), 413);
    }

    #[test]
    fn test_small_body_passes() {
        let req = request_with_length("128");
        assert!(check_body_size(&req, 1_048_576).is_none());
    }

    #[test]
    fn test_malformed_length_skips_check() {
        let req = request_with_length("not-a-number");
        assert!(check_body_size(&req, 1_048_576).is_none());
    }

    #[test]
    fn test_absent_length_skips_check() {
        let req = Request::builder().uri("/").body(()).unwrap();
        assert!(check_body_size(&req, 1_048_576).is_none());
    }
}
