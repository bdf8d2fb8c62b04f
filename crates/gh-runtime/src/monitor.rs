//! The monitoring/control loop state machine.

use crate::clock::Clock;
use crate::error::RuntimeResult;
use crate::shutdown::ShutdownFlag;
use gh_config::Config;
use gh_controls::{GreenhouseController, StatusSink, ThresholdBand};
use gh_log::{CsvLogWriter, LogRecord};
use gh_sensors::SensorSource;
use std::time::Duration;
use tracing::info;

/// Upper bound on one uninterrupted sleep, so a stop request is honored
/// promptly even with long read intervals.
const SLEEP_SLICE: Duration = Duration::from_millis(250);

/// Loop states. `Running` cycles until a stop is requested;
/// `ShuttingDown` performs at most one final flush and exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    ShuttingDown,
}

/// The main loop: read, control, buffer, periodic flush, sleep.
///
/// Single-threaded and synchronous; the buffer, actuator state, and log
/// file are owned exclusively by the iteration in flight. The buffer holds
/// exactly the records produced since the last successful flush.
pub struct MonitorLoop<S: SensorSource, C: Clock> {
    sensor: S,
    controller: GreenhouseController,
    writer: CsvLogWriter,
    clock: C,
    shutdown: ShutdownFlag,
    read_interval: Duration,
    save_interval: Duration,
    buffer: Vec<LogRecord>,
    last_flush: Duration,
}

impl<S: SensorSource, C: Clock> MonitorLoop<S, C> {
    /// Build the loop from a validated config.
    ///
    /// Creates the output directory; the log file itself appears on the
    /// first flush.
    pub fn new(
        config: &Config,
        sensor: S,
        clock: C,
        shutdown: ShutdownFlag,
    ) -> RuntimeResult<Self> {
        let temperature = ThresholdBand::new(
            config.targets.temperature_c.min,
            config.targets.temperature_c.max,
        )?;
        let air_humidity = ThresholdBand::new(
            config.targets.air_humidity_pct.min,
            config.targets.air_humidity_pct.max,
        )?;
        let writer = CsvLogWriter::new(&config.output.directory, &config.output.filename)?;

        Ok(Self {
            sensor,
            controller: GreenhouseController::new(temperature, air_humidity),
            writer,
            clock,
            shutdown,
            read_interval: config.read_interval(),
            save_interval: config.save_interval(),
            buffer: Vec::new(),
            last_flush: Duration::ZERO,
        })
    }

    /// Run until a stop is requested, then flush any unsaved records and
    /// return. A failed flush propagates immediately.
    pub fn run(&mut self, sink: &mut dyn StatusSink) -> RuntimeResult<()> {
        sink.report_startup(self.read_interval, self.save_interval, self.writer.path());
        info!(
            read_interval_s = self.read_interval.as_secs(),
            save_interval_s = self.save_interval.as_secs(),
            path = %self.writer.path().display(),
            "monitor loop started"
        );

        let mut state = LoopState::Running;
        loop {
            match state {
                LoopState::Running => {
                    if self.shutdown.is_requested() {
                        state = LoopState::ShuttingDown;
                        continue;
                    }
                    self.cycle(sink)?;
                    self.idle();
                }
                LoopState::ShuttingDown => {
                    sink.report_shutdown(self.buffer.len());
                    if !self.buffer.is_empty() {
                        self.flush(sink)?;
                    }
                    info!("monitor loop stopped");
                    return Ok(());
                }
            }
        }
    }

    /// One steady-state cycle.
    ///
    /// The flush triggers when save_interval has elapsed since the last
    /// flush, or when the log file is absent, so the first cycle always
    /// flushes and a file deleted mid-run is recreated on the next cycle.
    fn cycle(&mut self, sink: &mut dyn StatusSink) -> RuntimeResult<()> {
        let reading = self.sensor.read();
        let outcome = self.controller.control(&reading, sink);
        self.buffer.push(LogRecord::now(&reading, outcome.state));

        let elapsed = self.clock.monotonic().saturating_sub(self.last_flush);
        if elapsed >= self.save_interval || !self.writer.is_log_present() {
            self.flush(sink)?;
        }
        Ok(())
    }

    fn flush(&mut self, sink: &mut dyn StatusSink) -> RuntimeResult<()> {
        self.writer.flush(&self.buffer)?;
        sink.report_flush(self.writer.path(), self.buffer.len());
        info!(
            records = self.buffer.len(),
            path = %self.writer.path().display(),
            "flushed log buffer"
        );
        self.buffer.clear();
        self.last_flush = self.clock.monotonic();
        Ok(())
    }

    /// Voluntary suspend for one read interval, sliced so a stop request
    /// cuts the wait short.
    fn idle(&mut self) {
        let mut remaining = self.read_interval;
        while !remaining.is_zero() && !self.shutdown.is_requested() {
            let nap = remaining.min(SLEEP_SLICE);
            self.clock.sleep(nap);
            remaining -= nap;
        }
    }
}
