// API module entry
// JSON telemetry endpoints polled by the dashboard

mod handlers;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

/// API route handler
///
/// Dispatches `/api/*` paths to their endpoint handlers. Anything else under
/// the API prefix answers a JSON 404 that lists what exists.
pub async fn handle_api_request(
    path: &str,
    is_head: bool,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    match path {
        "/api/voltage" => handlers::handle_voltage(state, is_head).await,
        "/api/alerts" => handlers::handle_alerts(state, is_head).await,
        "/api/status" => handlers::handle_status(state, is_head).await,
        _ => {
            logger::log_api_request(method_label(is_head), path, 404);
            response::not_found(is_head, &state.config)
        }
    }
}

fn method_label(is_head: bool) -> &'static str {
    if is_head {
        "HEAD"
    } else {
        "GET"
    }
}
