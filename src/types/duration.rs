//! Nullable elapsed-time values

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An optional non-negative elapsed time in seconds.
///
/// Upstream feeds use `null` for laps that were never timed. NaN, negative
/// and infinite readings are observed as missing as well, so consumers only
/// ever see a usable number through [`DurationValue::seconds`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationValue(Option<f64>);

impl DurationValue {
    /// The explicit missing marker.
    pub const MISSING: DurationValue = DurationValue(None);

    /// Wrap a reading in seconds.
    pub fn from_secs(secs: f64) -> Self {
        DurationValue(Some(secs))
    }

    /// Valid seconds, or `None` for missing, NaN, negative or infinite readings.
    pub fn seconds(self) -> Option<f64> {
        self.0.filter(|s| s.is_finite() && *s >= 0.0)
    }

    /// Whether no usable reading is present.
    pub fn is_missing(self) -> bool {
        self.seconds().is_none()
    }

    /// Whole milliseconds, rounded once. Saturates for huge readings.
    pub fn millis(self) -> Option<u64> {
        self.seconds().map(|s| (s * 1000.0).round() as u64)
    }
}

impl From<Option<f64>> for DurationValue {
    fn from(value: Option<f64>) -> Self {
        DurationValue(value)
    }
}

impl From<f64> for DurationValue {
    fn from(secs: f64) -> Self {
        DurationValue::from_secs(secs)
    }
}

impl From<Duration> for DurationValue {
    fn from(duration: Duration) -> Self {
        DurationValue::from_secs(duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_readings_are_missing() {
        assert!(DurationValue::MISSING.is_missing());
        assert!(DurationValue::from_secs(f64::NAN).is_missing());
        assert!(DurationValue::from_secs(-0.5).is_missing());
        assert!(DurationValue::from_secs(f64::INFINITY).is_missing());
        assert_eq!(DurationValue::from_secs(0.0).seconds(), Some(0.0));
    }

    #[test]
    fn millis_round_to_nearest() {
        assert_eq!(DurationValue::from_secs(83.456).millis(), Some(83_456));
        assert_eq!(DurationValue::from_secs(59.9996).millis(), Some(60_000));
        assert_eq!(DurationValue::from(Duration::from_millis(1500)).millis(), Some(1_500));
    }

    #[test]
    fn serializes_as_number_or_null() {
        let values: Vec<DurationValue> = serde_yaml_ng::from_str("[83.456, null]").unwrap();
        assert_eq!(values, vec![DurationValue::from_secs(83.456), DurationValue::MISSING]);
    }
}
