//! Simulated sensor source.
//!
//! Stands in for real greenhouse hardware: each field is drawn
//! independently from a uniform distribution over a fixed range, then
//! rounded to the resolution the eventual hardware would report.

use crate::reading::Reading;
use rand::Rng;
use rand::rngs::ThreadRng;

/// Temperature generation range (degrees Celsius).
pub const TEMPERATURE_RANGE_C: (f64, f64) = (18.0, 35.0);
/// Air humidity generation range (percent).
pub const AIR_HUMIDITY_RANGE_PCT: (f64, f64) = (40.0, 90.0);
/// Soil moisture generation range (percent).
pub const SOIL_MOISTURE_RANGE_PCT: (f64, f64) = (20.0, 80.0);
/// Luminosity generation range (lux).
pub const LUMINOSITY_RANGE_LUX: (f64, f64) = (1000.0, 25000.0);

/// Source of readings, one per invocation.
///
/// The simulator below is the only implementation in this workspace; the
/// trait is the seam where a real sensor driver would plug in.
pub trait SensorSource {
    fn read(&mut self) -> Reading;
}

/// Simulated sensor backed by any [`Rng`].
///
/// Generation is total: there are no error conditions and no side effects
/// beyond randomness consumption.
///
/// # Example
///
/// ```
/// use gh_sensors::{SensorSource, SimulatedSensor};
///
/// let mut sensor = SimulatedSensor::new();
/// let reading = sensor.read();
/// assert!(reading.temperature_c >= 18.0 && reading.temperature_c <= 35.0);
/// ```
#[derive(Debug)]
pub struct SimulatedSensor<R: Rng> {
    rng: R,
}

impl SimulatedSensor<ThreadRng> {
    /// Simulator seeded from the thread-local RNG.
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for SimulatedSensor<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SimulatedSensor<R> {
    /// Simulator over a caller-supplied RNG (tests use a seeded `StdRng`).
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    fn draw(&mut self, range: (f64, f64)) -> f64 {
        self.rng.gen_range(range.0..=range.1)
    }
}

impl<R: Rng> SensorSource for SimulatedSensor<R> {
    fn read(&mut self) -> Reading {
        Reading {
            temperature_c: round_to_tenth(self.draw(TEMPERATURE_RANGE_C)),
            air_humidity_pct: round_to_tenth(self.draw(AIR_HUMIDITY_RANGE_PCT)),
            soil_moisture_pct: round_to_tenth(self.draw(SOIL_MOISTURE_RANGE_PCT)),
            luminosity_lux: self.draw(LUMINOSITY_RANGE_LUX).round(),
        }
    }
}

/// Round to one decimal place (0.1 resolution).
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
