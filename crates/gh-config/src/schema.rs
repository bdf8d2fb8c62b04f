//! Configuration schema definitions.
//!
//! A [`Config`] is constructed once at startup (from file, defaults, or
//! flag overrides), validated, and passed by reference to each component's
//! constructor. Nothing reconfigures at runtime.

use gh_controls::ThresholdBand;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Current schema version.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
}

/// Where the CSV log lands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Directory for the log file; created recursively if absent.
    pub directory: PathBuf,
    /// Log file name inside the directory.
    pub filename: String,
}

/// Loop timing, in whole seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SamplingConfig {
    /// Seconds between sensor readings.
    pub read_interval_s: u64,
    /// Seconds between periodic flushes to the log file.
    pub save_interval_s: u64,
}

/// Target bands for the controlled quantities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetsConfig {
    /// Ideal temperature range, degrees Celsius.
    pub temperature_c: ThresholdBand,
    /// Ideal air humidity range, percent.
    pub air_humidity_pct: ThresholdBand,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: LATEST_VERSION,
            output: OutputConfig::default(),
            sampling: SamplingConfig::default(),
            targets: TargetsConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
            filename: "greenhouse_log.csv".to_string(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            read_interval_s: 15,
            save_interval_s: 60,
        }
    }
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            temperature_c: ThresholdBand {
                min: 22.0,
                max: 28.0,
            },
            air_humidity_pct: ThresholdBand {
                min: 50.0,
                max: 70.0,
            },
        }
    }
}

impl Config {
    /// Time between readings.
    pub fn read_interval(&self) -> Duration {
        Duration::from_secs(self.sampling.read_interval_s)
    }

    /// Time between periodic flushes.
    pub fn save_interval(&self) -> Duration {
        Duration::from_secs(self.sampling.save_interval_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_reference_setup() {
        let config = Config::default();
        assert_eq!(config.version, LATEST_VERSION);
        assert_eq!(config.sampling.read_interval_s, 15);
        assert_eq!(config.sampling.save_interval_s, 60);
        assert_eq!(config.targets.temperature_c.min, 22.0);
        assert_eq!(config.targets.temperature_c.max, 28.0);
        assert_eq!(config.targets.air_humidity_pct.min, 50.0);
        assert_eq!(config.targets.air_humidity_pct.max, 70.0);
        assert_eq!(config.output.filename, "greenhouse_log.csv");
    }

    #[test]
    fn interval_helpers_convert_to_durations() {
        let config = Config::default();
        assert_eq!(config.read_interval(), Duration::from_secs(15));
        assert_eq!(config.save_interval(), Duration::from_secs(60));
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str("version: 1\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
