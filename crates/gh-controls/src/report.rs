//! Operator-facing status reporting.
//!
//! The loop and controller emit observational reports through this trait;
//! they never write to stdout themselves. The CLI installs a console sink,
//! tests use [`NullSink`].

use crate::controller::ControlOutcome;
use gh_sensors::Reading;
use std::path::Path;
use std::time::Duration;

/// Sink for the operator-facing textual stream.
pub trait StatusSink {
    /// Startup banner: configured intervals and target log path.
    fn report_startup(&mut self, read_interval: Duration, save_interval: Duration, path: &Path);

    /// One cycle: current readings, decisions with rationale, actuator states.
    fn report_cycle(&mut self, reading: &Reading, outcome: &ControlOutcome);

    /// A flush wrote `records` rows to `path`.
    fn report_flush(&mut self, path: &Path, records: usize);

    /// Shutdown notice; `unsaved` is the buffer size at the stop request.
    fn report_shutdown(&mut self, unsaved: usize);
}

/// Sink that discards every report.
pub struct NullSink;

impl StatusSink for NullSink {
    fn report_startup(&mut self, _: Duration, _: Duration, _: &Path) {}
    fn report_cycle(&mut self, _: &Reading, _: &ControlOutcome) {}
    fn report_flush(&mut self, _: &Path, _: usize) {}
    fn report_shutdown(&mut self, _: usize) {}
}
