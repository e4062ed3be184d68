//! Display formatting for lap and race durations
//!
//! Both formatters round to whole milliseconds once and split the result into
//! fields, so a carry never produces a `60.000` seconds field.

use crate::types::DurationValue;

/// Rendered for missing or invalid durations.
pub const NOT_AVAILABLE: &str = "N/A";

const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_HOUR: u64 = 3_600_000;

/// Format a lap-scale duration as `M:SS.mmm`.
///
/// ```rust
/// use pitboard::{format_lap_time, DurationValue};
///
/// assert_eq!(format_lap_time(DurationValue::from_secs(83.456)), "1:23.456");
/// assert_eq!(format_lap_time(DurationValue::MISSING), "N/A");
/// ```
pub fn format_lap_time(value: DurationValue) -> String {
    match value.millis() {
        Some(ms) => minutes_seconds(ms),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a race-scale duration as `H:MM:SS.mmm`, dropping the hour field
/// when it is zero.
///
/// ```rust
/// use pitboard::{format_race_time, DurationValue};
///
/// assert_eq!(format_race_time(DurationValue::from_secs(3725.040)), "1:02:05.040");
/// assert_eq!(format_race_time(DurationValue::from_secs(65.5)), "1:05.500");
/// ```
pub fn format_race_time(value: DurationValue) -> String {
    let Some(ms) = value.millis() else {
        return NOT_AVAILABLE.to_string();
    };

    let hours = ms / MS_PER_HOUR;
    if hours == 0 {
        return minutes_seconds(ms);
    }

    let rest = ms % MS_PER_HOUR;
    let minutes = rest / MS_PER_MINUTE;
    let (secs, millis) = split_seconds(rest % MS_PER_MINUTE);
    format!("{}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

fn minutes_seconds(ms: u64) -> String {
    let minutes = ms / MS_PER_MINUTE;
    let (secs, millis) = split_seconds(ms % MS_PER_MINUTE);
    format!("{}:{:02}.{:03}", minutes, secs, millis)
}

fn split_seconds(ms: u64) -> (u64, u64) {
    (ms / 1000, ms % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_lap_shaped(s: &str) -> bool {
        let Some((minutes, rest)) = s.split_once(':') else {
            return false;
        };
        let Some((secs, millis)) = rest.split_once('.') else {
            return false;
        };
        !minutes.is_empty()
            && minutes.chars().all(|c| c.is_ascii_digit())
            && secs.len() == 2
            && secs.chars().all(|c| c.is_ascii_digit())
            && millis.len() == 3
            && millis.chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn missing_is_not_available() {
        assert_eq!(format_lap_time(DurationValue::MISSING), "N/A");
        assert_eq!(format_race_time(DurationValue::MISSING), "N/A");
        assert_eq!(format_lap_time(DurationValue::from_secs(f64::NAN)), "N/A");
        assert_eq!(format_race_time(DurationValue::from_secs(-3.0)), "N/A");
    }

    #[test]
    fn lap_times() {
        assert_eq!(format_lap_time(DurationValue::from_secs(83.456)), "1:23.456");
        assert_eq!(format_lap_time(DurationValue::from_secs(0.0)), "0:00.000");
        assert_eq!(format_lap_time(DurationValue::from_secs(9.5)), "0:09.500");
        assert_eq!(format_lap_time(DurationValue::from_secs(59.9996)), "1:00.000");
        // lap format never shows hours
        assert_eq!(format_lap_time(DurationValue::from_secs(3725.04)), "62:05.040");
    }

    #[test]
    fn race_times() {
        assert_eq!(format_race_time(DurationValue::from_secs(3725.040)), "1:02:05.040");
        assert_eq!(format_race_time(DurationValue::from_secs(65.5)), "1:05.500");
        assert_eq!(format_race_time(DurationValue::from_secs(3600.0)), "1:00:00.000");
        assert_eq!(format_race_time(DurationValue::from_secs(7322.1)), "2:02:02.100");
    }

    #[test]
    fn huge_values_do_not_panic() {
        let rendered = format_race_time(DurationValue::from_secs(f64::MAX));
        assert!(!rendered.is_empty());
        let rendered = format_lap_time(DurationValue::from_secs(1e300));
        assert!(is_lap_shaped(&rendered));
    }

    proptest! {
        #[test]
        fn prop_lap_time_shape(secs in 0.0f64..1.0e7) {
            let rendered = format_lap_time(DurationValue::from_secs(secs));
            prop_assert!(is_lap_shaped(&rendered), "unexpected shape: {}", rendered);
        }

        #[test]
        fn prop_race_time_matches_lap_time_below_an_hour(secs in 0.0f64..3599.0) {
            let value = DurationValue::from_secs(secs);
            prop_assert_eq!(format_race_time(value), format_lap_time(value));
        }

        #[test]
        fn prop_race_time_has_hour_field_above_an_hour(secs in 3600.0f64..1.0e6) {
            let rendered = format_race_time(DurationValue::from_secs(secs));
            prop_assert_eq!(rendered.matches(':').count(), 2);
        }
    }
}
