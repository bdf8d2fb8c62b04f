//! Configuration validation logic.

use crate::schema::{Config, LATEST_VERSION};
use gh_controls::ThresholdBand;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_config(config: &Config) -> Result<(), ValidationError> {
    if config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    if config.output.filename.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "output.filename",
            value: config.output.filename.clone(),
            reason: "must not be empty".to_string(),
        });
    }

    validate_interval("sampling.read_interval_s", config.sampling.read_interval_s)?;
    validate_interval("sampling.save_interval_s", config.sampling.save_interval_s)?;

    validate_band("targets.temperature_c", &config.targets.temperature_c)?;
    validate_band("targets.air_humidity_pct", &config.targets.air_humidity_pct)?;

    Ok(())
}

fn validate_interval(field: &'static str, seconds: u64) -> Result<(), ValidationError> {
    if seconds == 0 {
        return Err(ValidationError::InvalidValue {
            field,
            value: seconds.to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }
    Ok(())
}

fn validate_band(field: &'static str, band: &ThresholdBand) -> Result<(), ValidationError> {
    // Deserialization bypasses ThresholdBand::new, so re-run its checks here.
    ThresholdBand::new(band.min, band.max).map_err(|e| ValidationError::InvalidValue {
        field,
        value: format!("[{}, {}]", band.min, band.max),
        reason: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Config;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn zero_interval_rejected() {
        let mut config = Config::default();
        config.sampling.read_interval_s = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidValue {
                field: "sampling.read_interval_s",
                ..
            })
        ));
    }

    #[test]
    fn inverted_band_rejected() {
        let mut config = Config::default();
        config.targets.temperature_c = ThresholdBand {
            min: 28.0,
            max: 22.0,
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_filename_rejected() {
        let mut config = Config::default();
        config.output.filename = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn future_version_rejected() {
        let mut config = Config::default();
        config.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
