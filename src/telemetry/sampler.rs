//! Random telemetry samplers
//!
//! Produces the mock values behind the JSON endpoints. All draws go through
//! a caller-supplied [`Rng`] so the stream can be seeded for reproducible
//! runs and driven deterministically from tests.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::types::{Alert, AlertKind, Bounds, DeviceStatus, VoltageReading, VoltageWindow};

/// Label reported as the supply feeding the meter.
pub const POWER_SOURCE: &str = "Main Grid Supply";

/// Fixed identifier of the simulated monitoring device.
pub const DEVICE_ID: &str = "DVT-A1B2C3";

/// Mains frequency, Hz. The mock grid never drifts.
pub const LINE_FREQUENCY_HZ: u32 = 60;

/// Probability that the device reports itself connected.
const CONNECTED_PROBABILITY: f64 = 0.95;

/// Alert templates in emission order. A response never reorders these;
/// only how many of them appear varies per call.
struct AlertTemplate {
    title: &'static str,
    kind: AlertKind,
    status: &'static str,
    volts_min: f64,
    volts_max: f64,
}

const ALERT_TEMPLATES: [AlertTemplate; 2] = [
    AlertTemplate {
        title: "Voltage Dropped",
        kind: AlertKind::LowVoltage,
        status: "Warning (Low V)",
        volts_min: 190.0,
        volts_max: 210.0,
    },
    AlertTemplate {
        title: "Voltage Hiked",
        kind: AlertKind::HighVoltage,
        status: "Warning (High V)",
        volts_min: 240.0,
        volts_max: 250.0,
    },
];

/// Round to one decimal place, the precision the dashboard displays.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Draw one meter reading.
///
/// The base voltage is uniform in [215, 245]; min and max are offset from it
/// by independent draws in [5, 10], so the window is not symmetric but always
/// brackets the current value. Ampere and consumption bounds are drawn from
/// non-overlapping intervals and are independent of the voltage.
pub fn sample_voltage(rng: &mut impl Rng) -> VoltageReading {
    let base = rng.gen_range(215.0..=245.0);
    VoltageReading {
        voltage_range: VoltageWindow {
            min: round1(base - rng.gen_range(5.0..=10.0)),
            max: round1(base + rng.gen_range(5.0..=10.0)),
            current: round1(base),
        },
        current_range: Bounds {
            min: round1(rng.gen_range(8.0..=10.0)),
            max: round1(rng.gen_range(15.0..=18.0)),
        },
        consumption_range: Bounds {
            min: round1(rng.gen_range(7.0..=9.0)),
            max: round1(rng.gen_range(10.0..=14.0)),
        },
        frequency: LINE_FREQUENCY_HZ,
        surge_count: rng.gen_range(0..=8),
        power_source: POWER_SOURCE,
    }
}

/// Draw the current alert list.
///
/// The raw count is uniform in [0, 3] and then capped at the number of
/// templates, so responses hold 0, 1 or 2 alerts taken from the front of
/// [`ALERT_TEMPLATES`] in order. Timestamps are backdated up to an hour.
pub fn sample_alerts(rng: &mut impl Rng, now: DateTime<Utc>) -> Vec<Alert> {
    let requested = rng.gen_range(0..=3);
    let count = usize::min(requested, ALERT_TEMPLATES.len());

    ALERT_TEMPLATES
        .iter()
        .take(count)
        .map(|template| {
            let volts = round1(rng.gen_range(template.volts_min..=template.volts_max));
            let minutes_ago = rng.gen_range(0..=60);
            Alert {
                title: template.title,
                kind: template.kind,
                value: format!("{volts:.1}V"),
                status: template.status,
                timestamp: now - Duration::minutes(minutes_ago),
            }
        })
        .collect()
}

/// Draw the device connectivity snapshot. The last sync is backdated up to
/// half an hour; the device identifier never changes.
pub fn sample_status(rng: &mut impl Rng, now: DateTime<Utc>) -> DeviceStatus {
    DeviceStatus {
        connected: rng.gen_bool(CONNECTED_PROBABILITY),
        last_sync: now - Duration::minutes(rng.gen_range(0..=30)),
        device_id: DEVICE_ID,
    }
}
