//! HTTP cache validation
//!
//! `ETag` generation for served assets and `If-None-Match` evaluation.
//! Only the static side uses this; telemetry responses are never cacheable.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hash asset content into a quoted `ETag`, e.g. `"9f86d081884c"`.
///
/// Content-addressed rather than mtime-based, so re-deploying identical
/// bytes keeps client caches warm.
pub fn asset_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check whether a client `If-None-Match` header matches the asset's `ETag`.
///
/// Handles single tags, comma-separated lists and the `*` wildcard. A match
/// means the handler should answer 304 Not Modified.
pub fn if_none_match_hits(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}
