// Telemetry value shapes
// Every value is built fresh per request, serialized once, and discarded.
// Field order matches the JSON the dashboard client expects.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Mains voltage window around the instantaneous reading, in volts.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoltageWindow {
    pub min: f64,
    pub max: f64,
    pub current: f64,
}

/// A plain min/max pair (amperes or kilowatt-hours, depending on use).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// One synthetic meter reading, the `/api/voltage` payload.
#[derive(Debug, Clone, Serialize)]
pub struct VoltageReading {
    pub voltage_range: VoltageWindow,
    pub current_range: Bounds,
    pub consumption_range: Bounds,
    pub frequency: u32,
    pub surge_count: u32,
    pub power_source: &'static str,
}

/// Alert classification. Serialized under the wire key `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowVoltage,
    HighVoltage,
}

/// One entry of the `/api/alerts` array.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub value: String,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// The `/api/status` payload.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceStatus {
    pub connected: bool,
    pub last_sync: DateTime<Utc>,
    pub device_id: &'static str,
}
