//! Static file serving module
//!
//! Loads dashboard assets from the configured webroot, with MIME detection,
//! traversal containment and `ETag` revalidation.

use crate::config::{AssetsConfig, Config};
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a dashboard asset from the webroot
pub async fn serve_asset(ctx: &RequestContext<'_>, config: &Config) -> Response<Full<Bytes>> {
    match load_asset(&config.assets, ctx.path).await {
        Some((content, content_type)) => build_asset_response(&content, content_type, ctx, config),
        None => {
            if ctx.access_log {
                logger::log_response(404, 0);
            }
            http::build_404_response()
        }
    }
}

/// Load an asset from the webroot, mapping the root path to the index file
///
/// Returns `None` for misses, directories, unreadable files and anything
/// that resolves outside the webroot.
pub async fn load_asset(assets: &AssetsConfig, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");

    let relative_path = if clean_path.is_empty() {
        assets.index.as_str()
    } else {
        clean_path.as_str()
    };

    let file_path = Path::new(&assets.root).join(relative_path);

    // Containment check: both sides canonicalized before comparing
    let root_canonical = match Path::new(&assets.root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Asset directory not found or inaccessible '{}': {e}",
                assets.root
            ));
            return None;
        }
    };

    // Misses are ordinary 404s, not worth a warning
    let Ok(file_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            file_canonical.display()
        ));
        return None;
    }
    if !file_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {e}",
                file_canonical.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Build asset response with `ETag` revalidation
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    ctx: &RequestContext<'_>,
    config: &Config,
) -> Response<Full<Bytes>> {
    let etag = cache::asset_etag(data);

    if cache::if_none_match_hits(ctx.if_none_match.as_deref(), &etag) {
        if ctx.access_log {
            logger::log_response(304, 0);
        }
        return http::build_304_response(&etag);
    }

    let content_length = data.len();
    if ctx.access_log {
        logger::log_response(200, content_length);
    }

    let body = if ctx.is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .header("Server", config.http.server_name.as_str());

    if config.http.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build asset response: {e}"));
        Response::new(Full::new(Bytes::new()))
    })
}
