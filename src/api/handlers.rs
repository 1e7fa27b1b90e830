// Telemetry endpoint handlers module

use chrono::Utc;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::sync::Arc;

use super::method_label;
use super::response::json_response;
use crate::config::AppState;
use crate::logger;
use crate::telemetry;

/// GET /api/voltage - one fresh meter reading
pub async fn handle_voltage(state: &Arc<AppState>, is_head: bool) -> Response<Full<Bytes>> {
    let reading = {
        let mut rng = state.rng.lock().await;
        telemetry::sample_voltage(&mut *rng)
    };

    logger::log_api_request(method_label(is_head), "/api/voltage", 200);
    json_response(StatusCode::OK, &reading, is_head, &state.config)
}

/// GET /api/alerts - current alert list (may be empty)
pub async fn handle_alerts(state: &Arc<AppState>, is_head: bool) -> Response<Full<Bytes>> {
    let alerts = {
        let mut rng = state.rng.lock().await;
        telemetry::sample_alerts(&mut *rng, Utc::now())
    };

    logger::log_api_request(method_label(is_head), "/api/alerts", 200);
    json_response(StatusCode::OK, &alerts, is_head, &state.config)
}

/// GET /api/status - device connectivity snapshot
pub async fn handle_status(state: &Arc<AppState>, is_head: bool) -> Response<Full<Bytes>> {
    let status = {
        let mut rng = state.rng.lock().await;
        telemetry::sample_status(&mut *rng, Utc::now())
    };

    logger::log_api_request(method_label(is_head), "/api/status", 200);
    json_response(StatusCode::OK, &status, is_head, &state.config)
}
