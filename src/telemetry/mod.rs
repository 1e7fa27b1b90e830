//! Mock telemetry generation
//!
//! Value types and the random samplers that fill them. Nothing here touches
//! HTTP; the API layer serializes these values as-is.

pub mod sampler;
pub mod types;

pub use sampler::{sample_alerts, sample_status, sample_voltage};
