//! Greenhouse actuator controller.

use crate::band::{BandPosition, ThresholdBand};
use crate::report::StatusSink;
use gh_sensors::Reading;
use serde::{Deserialize, Serialize};

/// On/off state of the two actuators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorState {
    /// Exhaust fan relay.
    pub fan_on: bool,
    /// Humidifier relay.
    pub humidifier_on: bool,
}

/// Result of one control step: the two band classifications (the decision
/// rationale) and the actuator state they produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlOutcome {
    /// Where the temperature fell relative to its target band.
    pub temperature: BandPosition,
    /// Where the air humidity fell relative to its target band.
    pub air_humidity: BandPosition,
    /// Actuator state after applying the decision policy.
    pub state: ActuatorState,
}

/// Threshold controller for the fan and humidifier.
///
/// Decision policy, evaluated independently per dimension on every call,
/// with no hysteresis and no memory beyond the overwritten flags:
///
/// - temperature above its band turns the fan on; anywhere else (the ideal
///   band included) turns it off.
/// - air humidity below its band turns the humidifier on; anywhere else
///   turns it off.
///
/// # Example
///
/// ```
/// use gh_controls::{GreenhouseController, NullSink, ThresholdBand};
/// use gh_sensors::Reading;
///
/// let mut controller = GreenhouseController::new(
///     ThresholdBand::new(22.0, 28.0).unwrap(),
///     ThresholdBand::new(50.0, 70.0).unwrap(),
/// );
/// let reading = Reading {
///     temperature_c: 30.0,
///     air_humidity_pct: 45.0,
///     soil_moisture_pct: 55.0,
///     luminosity_lux: 12000.0,
/// };
/// let outcome = controller.control(&reading, &mut NullSink);
/// assert!(outcome.state.fan_on);
/// assert!(outcome.state.humidifier_on);
/// ```
#[derive(Debug)]
pub struct GreenhouseController {
    temperature_band: ThresholdBand,
    air_humidity_band: ThresholdBand,
    state: ActuatorState,
}

impl GreenhouseController {
    /// Controller with both actuators initially off.
    pub fn new(temperature_band: ThresholdBand, air_humidity_band: ThresholdBand) -> Self {
        Self {
            temperature_band,
            air_humidity_band,
            state: ActuatorState::default(),
        }
    }

    /// Current actuator state, as set by the last [`control`](Self::control) call.
    pub fn state(&self) -> ActuatorState {
        self.state
    }

    /// Apply the decision policy to one reading and report the outcome.
    ///
    /// This is the only place actuator state changes. The sink receives the
    /// reading and outcome on every call.
    pub fn control(&mut self, reading: &Reading, sink: &mut dyn StatusSink) -> ControlOutcome {
        let temperature = self.temperature_band.classify(reading.temperature_c);
        let air_humidity = self.air_humidity_band.classify(reading.air_humidity_pct);

        self.state = ActuatorState {
            fan_on: temperature == BandPosition::Above,
            humidifier_on: air_humidity == BandPosition::Below,
        };

        let outcome = ControlOutcome {
            temperature,
            air_humidity,
            state: self.state,
        };
        sink.report_cycle(reading, &outcome);
        outcome
    }
}
