//! gh-controls: threshold-based actuator control for the greenhouse loop.
//!
//! The control domain is deliberately small: two actuators (fan,
//! humidifier), each driven by where the current reading falls relative to
//! an immutable target band. Decisions are made fresh every cycle from the
//! current reading alone; the only carried state is the pair of on/off
//! flags, and those are simply overwritten.
//!
//! # Design Principles
//!
//! - **Localized mutation**: actuator flags change only inside
//!   [`GreenhouseController::control`].
//! - **Rationale as data**: the outcome carries the band classifications so
//!   reporting sinks can explain each decision.
//! - **Pluggable reporting**: operator-facing output goes through the
//!   [`StatusSink`] trait, keeping the controller free of I/O.

pub mod band;
pub mod controller;
pub mod error;
pub mod report;

pub use band::{BandPosition, ThresholdBand};
pub use controller::{ActuatorState, ControlOutcome, GreenhouseController};
pub use error::{ControlError, ControlResult};
pub use report::{NullSink, StatusSink};
