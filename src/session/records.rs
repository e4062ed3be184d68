//! Per-row session records
//!
//! Field names follow the timing feed's PascalCase columns. Times are seconds
//! on the session clock; missing values deserialize as missing.

use serde::{Deserialize, Serialize};

use crate::types::{DurationValue, TrackStatus};

/// One lap driven by one driver
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct LapRecord {
    /// Driver abbreviation
    pub driver: String,
    /// Lap number, starting at 1
    pub lap_number: u32,
    /// Lap duration
    pub lap_time: DurationValue,
    /// Session time at which the lap started
    pub lap_start_time: DurationValue,
    /// Tyre compound
    pub compound: Option<String>,
    /// Laps driven on this set of tyres
    pub tyre_life: Option<u32>,
    /// Concatenated track status codes seen during the lap
    pub track_status: Option<String>,
}

/// Classification row for one car
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct ResultRecord {
    /// Racing number, as text
    #[serde(alias = "DriverNumber")]
    pub car_number: String,
    /// Three-letter driver code
    pub abbreviation: String,
    pub full_name: Option<String>,
    pub team_name: Option<String>,
    /// Finishing or current position
    pub position: Option<u32>,
}

/// One change of track status
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct TrackStatusRecord {
    /// Session time of the change
    pub time: DurationValue,
    /// Raw status code
    pub status: String,
    /// Feed's own description
    pub message: Option<String>,
}

impl TrackStatusRecord {
    pub fn decoded(&self) -> TrackStatus {
        TrackStatus::from_code(&self.status)
    }
}

/// Event metadata for one round of the championship
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct EventInfo {
    pub year: u16,
    pub round_number: u8,
    pub event_name: String,
    pub country: Option<String>,
    pub location: Option<String>,
    /// ISO-8601 date of the main event
    pub event_date: Option<String>,
    /// Event format (`conventional`, `sprint`, ...)
    pub event_format: Option<String>,
}
