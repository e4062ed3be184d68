//! Race-control feed records and the side tables used to interpret them

use serde::{Deserialize, Serialize};

use super::DurationValue;

/// A race-control message exactly as the feed delivered it.
///
/// Accepts the timing feed's own column names (`Message`, `RacingNumber`,
/// `Time`) as aliases.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RaceControlMessage {
    /// Free-form message text
    #[serde(alias = "Message")]
    pub text: String,
    /// Driver the feed attributed the message to, if any
    pub driver: Option<String>,
    /// Car number the feed attributed the message to, if any
    #[serde(alias = "RacingNumber")]
    pub car_number: Option<String>,
    /// Session clock when the message was issued
    #[serde(alias = "Time")]
    pub session_time: Option<DurationValue>,
}

impl RaceControlMessage {
    /// Message carrying only text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    pub fn with_car_number(mut self, car_number: impl Into<String>) -> Self {
        self.car_number = Some(car_number.into());
        self
    }

    pub fn with_session_time(mut self, session_time: impl Into<DurationValue>) -> Self {
        self.session_time = Some(session_time.into());
        self
    }
}

/// One car in the session, mapping the racing number to a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DriverRosterEntry {
    pub car_number: String,
    pub driver_label: String,
}

impl DriverRosterEntry {
    pub fn new(car_number: impl Into<String>, driver_label: impl Into<String>) -> Self {
        Self { car_number: car_number.into(), driver_label: driver_label.into() }
    }
}

/// Start of a lap on the session clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LapTimelineEntry {
    pub lap_number: u32,
    pub lap_start_time: DurationValue,
}

impl LapTimelineEntry {
    pub fn new(lap_number: u32, lap_start_time: impl Into<DurationValue>) -> Self {
        Self { lap_number, lap_start_time: lap_start_time.into() }
    }
}
