//! Target bands for controlled quantities.

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` target range for a controlled quantity.
///
/// The band is fixed at construction and never changes at runtime.
///
/// # Example
///
/// ```
/// use gh_controls::{BandPosition, ThresholdBand};
///
/// let band = ThresholdBand::new(22.0, 28.0).unwrap();
/// assert_eq!(band.classify(30.0), BandPosition::Above);
/// assert_eq!(band.classify(25.0), BandPosition::Within);
/// assert_eq!(band.classify(20.0), BandPosition::Below);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

/// Where a value falls relative to a [`ThresholdBand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPosition {
    /// Strictly below the band minimum.
    Below,
    /// Inside the band, bounds included.
    Within,
    /// Strictly above the band maximum.
    Above,
}

impl ThresholdBand {
    /// Create a band.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or `min >= max`.
    pub fn new(min: f64, max: f64) -> ControlResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ControlError::InvalidArg {
                what: "band bounds must be finite",
            });
        }
        if min >= max {
            return Err(ControlError::InvalidArg {
                what: "band min must be less than max",
            });
        }
        Ok(Self { min, max })
    }

    /// Classify a value against the band. Bounds count as `Within`.
    pub fn classify(&self, value: f64) -> BandPosition {
        if value > self.max {
            BandPosition::Above
        } else if value < self.min {
            BandPosition::Below
        } else {
            BandPosition::Within
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_covers_all_positions() {
        let band = ThresholdBand::new(50.0, 70.0).unwrap();
        assert_eq!(band.classify(45.0), BandPosition::Below);
        assert_eq!(band.classify(50.0), BandPosition::Within);
        assert_eq!(band.classify(60.0), BandPosition::Within);
        assert_eq!(band.classify(70.0), BandPosition::Within);
        assert_eq!(band.classify(80.0), BandPosition::Above);
    }

    #[test]
    fn invalid_bounds_rejected() {
        assert!(ThresholdBand::new(28.0, 22.0).is_err());
        assert!(ThresholdBand::new(22.0, 22.0).is_err());
        assert!(ThresholdBand::new(f64::NAN, 1.0).is_err());
        assert!(ThresholdBand::new(0.0, f64::INFINITY).is_err());
    }
}
