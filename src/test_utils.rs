//! Test utilities: in-memory sample sessions and fixture path resolution
//!
//! Shared by unit tests and benchmarks so both exercise the same data.

#![cfg(any(test, feature = "benchmark"))]

use std::path::{Path, PathBuf};

use crate::session::{EventInfo, LapRecord, ResultRecord, SessionSnapshot, TrackStatusRecord};
use crate::types::{DriverRosterEntry, DurationValue, LapTimelineEntry, RaceControlMessage};

/// Session clock at the start of lap 1 in the sample session.
pub const SAMPLE_RACE_START: f64 = 3600.0;

/// Error returned when a required fixture file cannot be located.
#[derive(Debug, Clone)]
pub struct FixtureError {
    message: String,
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FixtureError {}

/// Directory holding snapshot fixtures, relative to the crate root.
pub fn test_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

/// Require a fixture inside `test-data/` by relative path.
pub fn require_fixture<P: AsRef<Path>>(relative: P) -> Result<PathBuf, FixtureError> {
    let path = test_data_dir().join(relative.as_ref());
    if path.exists() {
        Ok(path)
    } else {
        Err(FixtureError { message: format!("Missing snapshot fixture: {}", path.display()) })
    }
}

pub fn sample_roster() -> Vec<DriverRosterEntry> {
    vec![
        DriverRosterEntry::new("1", "VER"),
        DriverRosterEntry::new("44", "HAM"),
        DriverRosterEntry::new("16", "LEC"),
    ]
}

pub fn sample_timeline() -> Vec<LapTimelineEntry> {
    vec![
        LapTimelineEntry::new(1, SAMPLE_RACE_START),
        LapTimelineEntry::new(2, SAMPLE_RACE_START + 95.0),
        LapTimelineEntry::new(3, SAMPLE_RACE_START + 189.0),
    ]
}

pub fn sample_messages() -> Vec<RaceControlMessage> {
    vec![
        RaceControlMessage::new("GREEN LIGHT - PIT EXIT OPEN").with_session_time(3500.0),
        RaceControlMessage::new(
            "CAR 44 (HAM) TIME PENALTY 5 SECONDS FOR CAUSING A COLLISION ON LAP 2",
        )
        .with_session_time(3720.0),
        RaceControlMessage::new("TURN 4 INCIDENT NOTED - NO FURTHER ACTION")
            .with_session_time(3730.0),
        RaceControlMessage::new("CAR 16 (LEC) 10 SECOND TIME PENALTY - UNSAFE RELEASE")
            .with_session_time(3800.0),
        RaceControlMessage::new("DRS ENABLED").with_session_time(3810.0),
    ]
}

fn sample_lap(driver: &str, lap_number: u32, lap_time: Option<f64>) -> LapRecord {
    let start = sample_timeline()
        .into_iter()
        .find(|entry| entry.lap_number == lap_number)
        .map_or(DurationValue::MISSING, |entry| entry.lap_start_time);
    LapRecord {
        driver: driver.to_string(),
        lap_number,
        lap_time: DurationValue::from(lap_time),
        lap_start_time: start,
        compound: Some("MEDIUM".to_string()),
        tyre_life: Some(lap_number),
        track_status: Some("1".to_string()),
    }
}

/// A three-lap, three-driver race with two penalties.
pub fn sample_snapshot() -> SessionSnapshot {
    let laps = [
        ("VER", [Some(95.1), Some(93.2), Some(93.8)]),
        ("HAM", [Some(95.8), Some(94.0), Some(93.9)]),
        ("LEC", [Some(96.2), Some(94.5), None]),
    ]
    .into_iter()
    .flat_map(|(driver, times)| {
        times.into_iter().zip(1u32..).map(move |(time, lap)| sample_lap(driver, lap, time))
    })
    .collect();

    let results = sample_roster()
        .into_iter()
        .zip(1u32..)
        .map(|(entry, position)| ResultRecord {
            car_number: entry.car_number,
            abbreviation: entry.driver_label,
            full_name: None,
            team_name: None,
            position: Some(position),
        })
        .collect();

    SessionSnapshot {
        event: EventInfo {
            year: 2024,
            round_number: 1,
            event_name: "Sample Grand Prix".to_string(),
            ..EventInfo::default()
        },
        laps,
        results,
        track_status: vec![
            TrackStatusRecord {
                time: DurationValue::from_secs(3400.0),
                status: "1".to_string(),
                message: Some("AllClear".to_string()),
            },
            TrackStatusRecord {
                time: DurationValue::from_secs(3740.0),
                status: "2".to_string(),
                message: Some("Yellow".to_string()),
            },
        ],
        race_control_messages: sample_messages(),
    }
}
