//! Sensor reading type.

use serde::{Deserialize, Serialize};

/// One snapshot of the four monitored quantities.
///
/// A reading is produced fresh each cycle and never mutated; its only
/// identity is the timestamp attached when it is turned into a log record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Relative air humidity in percent.
    pub air_humidity_pct: f64,
    /// Soil moisture in percent.
    pub soil_moisture_pct: f64,
    /// Illuminance in lux.
    pub luminosity_lux: f64,
}
