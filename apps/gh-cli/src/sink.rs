//! Console status sink: the operator-facing output stream.

use gh_controls::{BandPosition, ControlOutcome, StatusSink};
use gh_log::SwitchState;
use gh_sensors::Reading;
use std::path::Path;
use std::time::Duration;

/// Prints the per-cycle report, flush confirmations, and lifecycle notices
/// to stdout.
pub struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn report_startup(&mut self, read_interval: Duration, save_interval: Duration, path: &Path) {
        println!("\nGreenhouse monitor started.");
        println!("Reading sensors every {} seconds.", read_interval.as_secs());
        println!(
            "Saving to {} every {} seconds.\n",
            path.display(),
            save_interval.as_secs()
        );
    }

    fn report_cycle(&mut self, reading: &Reading, outcome: &ControlOutcome) {
        println!("\n===== Environment Readings =====");
        println!("Temperature:   {:.1} C", reading.temperature_c);
        println!("Air humidity:  {:.1} %", reading.air_humidity_pct);
        println!("Soil moisture: {:.1} %", reading.soil_moisture_pct);
        println!("Luminosity:    {:.0} lux", reading.luminosity_lux);
        println!("================================");

        println!("{}", temperature_line(outcome.temperature));
        println!("{}", humidity_line(outcome.air_humidity));

        println!("\n----- Actuator States -----");
        println!("Fan:         {}", SwitchState::from(outcome.state.fan_on));
        println!(
            "Humidifier:  {}",
            SwitchState::from(outcome.state.humidifier_on)
        );
        println!("---------------------------\n");
    }

    fn report_flush(&mut self, path: &Path, records: usize) {
        println!("Saved {} record(s) to {}\n", records, path.display());
    }

    fn report_shutdown(&mut self, unsaved: usize) {
        println!("\nStopped by operator. Shutting down.");
        if unsaved > 0 {
            println!("Saving {} remaining record(s)...", unsaved);
        }
    }
}

fn temperature_line(position: BandPosition) -> &'static str {
    match position {
        BandPosition::Above => "Temperature HIGH: turning fan on.",
        BandPosition::Below => "Temperature LOW: fan stays off.",
        BandPosition::Within => "Temperature ideal. No action needed.",
    }
}

fn humidity_line(position: BandPosition) -> &'static str {
    match position {
        BandPosition::Below => "Humidity LOW: turning humidifier on.",
        BandPosition::Above => "Humidity HIGH: humidifier stays off.",
        BandPosition::Within => "Humidity adequate. No action needed.",
    }
}
