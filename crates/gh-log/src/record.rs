//! Log record types.

use chrono::Local;
use gh_controls::ActuatorState;
use gh_sensors::Reading;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used in log rows.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Two-valued actuator token as persisted in the CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchState {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl From<bool> for SwitchState {
    fn from(on: bool) -> Self {
        if on { SwitchState::On } else { SwitchState::Off }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchState::On => write!(f, "ON"),
            SwitchState::Off => write!(f, "OFF"),
        }
    }
}

/// One persisted row: a timestamped reading plus the actuator states the
/// controller chose for it. Created once per cycle, never mutated.
///
/// Field order here is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub temperature_c: f64,
    pub air_humidity_pct: f64,
    pub soil_moisture_pct: f64,
    pub luminosity_lux: f64,
    pub fan_state: SwitchState,
    pub humidifier_state: SwitchState,
}

impl LogRecord {
    /// Record with an explicit timestamp.
    pub fn new(timestamp: String, reading: &Reading, state: ActuatorState) -> Self {
        Self {
            timestamp,
            temperature_c: reading.temperature_c,
            air_humidity_pct: reading.air_humidity_pct,
            soil_moisture_pct: reading.soil_moisture_pct,
            luminosity_lux: reading.luminosity_lux,
            fan_state: state.fan_on.into(),
            humidifier_state: state.humidifier_on.into(),
        }
    }

    /// Record stamped with the current local time.
    pub fn now(reading: &Reading, state: ActuatorState) -> Self {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::new(timestamp, reading, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> Reading {
        Reading {
            temperature_c: 29.5,
            air_humidity_pct: 45.0,
            soil_moisture_pct: 62.3,
            luminosity_lux: 18250.0,
        }
    }

    #[test]
    fn switch_state_from_bool() {
        assert_eq!(SwitchState::from(true), SwitchState::On);
        assert_eq!(SwitchState::from(false), SwitchState::Off);
    }

    #[test]
    fn record_copies_reading_and_state() {
        let state = ActuatorState {
            fan_on: true,
            humidifier_on: false,
        };
        let record = LogRecord::new("2026-08-06 10:15:00".to_string(), &reading(), state);

        assert_eq!(record.temperature_c, 29.5);
        assert_eq!(record.luminosity_lux, 18250.0);
        assert_eq!(record.fan_state, SwitchState::On);
        assert_eq!(record.humidifier_state, SwitchState::Off);
    }

    #[test]
    fn now_uses_expected_timestamp_shape() {
        let record = LogRecord::now(&reading(), ActuatorState::default());
        // YYYY-MM-DD HH:MM:SS is always 19 chars with separators in place.
        assert_eq!(record.timestamp.len(), 19);
        assert_eq!(&record.timestamp[4..5], "-");
        assert_eq!(&record.timestamp[10..11], " ");
        assert_eq!(&record.timestamp[13..14], ":");
    }
}
