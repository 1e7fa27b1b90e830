//! Request handler module
//!
//! Request routing dispatch and the static side of the server. The JSON
//! telemetry endpoints live in the `api` module.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
