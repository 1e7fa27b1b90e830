//! HTTP protocol layer
//!
//! Protocol-level helpers shared by the static file handler and the
//! telemetry API, decoupled from routing and business logic.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_500_response, build_options_response,
};
