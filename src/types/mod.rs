//! Core types for race-control and timing data.
//!
//! This module provides the records the classifier and formatter operate on:
//! - [`DurationValue`] is a nullable elapsed time as delivered by timing feeds
//! - [`RaceControlMessage`] is one verbatim race-control record
//! - [`DriverRosterEntry`] and [`LapTimelineEntry`] are the side tables used
//!   to resolve car numbers and session times
//! - [`PenaltyAnnotation`] is the derived, best-effort classification
//! - [`TrackStatus`] decodes the feed's track status codes
//!
//! Optional inputs are modelled as `Option`s. Absence is an ordinary value
//! and is rendered as `"Unknown"` or `"N/A"` at display time.
//!
//! ## Usage Example
//!
//! ```rust
//! use pitboard::types::{DurationValue, RaceControlMessage};
//!
//! let message = RaceControlMessage::new("CAR 16 (LEC) TIME PENALTY 5 SECONDS")
//!     .with_session_time(DurationValue::from_secs(2154.3));
//! assert!(message.driver.is_none());
//! assert_eq!(message.session_time.and_then(|t| t.seconds()), Some(2154.3));
//! ```

mod annotation;
mod duration;
mod message;
pub mod track_status;

pub use annotation::{MessageCategory, PenaltyAnnotation, PenaltyType, UNKNOWN};
pub use duration::DurationValue;
pub use message::{DriverRosterEntry, LapTimelineEntry, RaceControlMessage};
pub use track_status::TrackStatus;

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_duration_seconds_never_negative(secs in proptest::num::f64::ANY) {
            if let Some(s) = DurationValue::from_secs(secs).seconds() {
                prop_assert!(s.is_finite());
                prop_assert!(s >= 0.0);
            }
        }
    }

    #[test]
    fn message_defaults_fill_missing_fields() {
        let message: RaceControlMessage =
            serde_yaml_ng::from_str("Text: DRS ENABLED").expect("minimal message parses");
        assert_eq!(message, RaceControlMessage::new("DRS ENABLED"));
    }

    #[test]
    fn message_accepts_feed_column_names() {
        let yaml = "Message: CAR 4 TIME PENALTY\nRacingNumber: '4'\nTime: 4012.5\n";
        let message: RaceControlMessage = serde_yaml_ng::from_str(yaml).expect("feed row parses");
        assert_eq!(message.car_number.as_deref(), Some("4"));
        assert_eq!(message.session_time, Some(DurationValue::from_secs(4012.5)));
    }
}
