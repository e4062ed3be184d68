//! # Session snapshots
//!
//! A [`SessionSnapshot`] is everything the boards need from one session:
//! laps, results, track status changes and race-control messages, plus the
//! event it belongs to. Snapshots are exported from an upstream timing
//! source as YAML (or JSON, which the YAML parser also accepts).
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Snapshot pipeline               │
//! │                                              │
//! │  SessionSource ──► SessionSnapshot::parse    │
//! │                          │                   │
//! │             ┌────────────┼────────────┐      │
//! │             ▼            ▼            ▼      │
//! │          roster()  lap_timeline()   laps     │
//! │             └──────► classify ◄─────┘        │
//! │                          │                   │
//! │                          ▼                   │
//! │                    SessionBoard              │
//! └──────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::types::{DriverRosterEntry, DurationValue, LapTimelineEntry, RaceControlMessage};
use crate::{PitboardError, Result};

pub mod records;
pub mod schedule;

pub use records::{EventInfo, LapRecord, ResultRecord, TrackStatusRecord};
pub use schedule::EventSchedule;

/// First season with timing data available upstream.
pub const FIRST_SEASON: u16 = 2018;

/// Highest round number accepted in a session key.
pub const MAX_ROUND: u8 = 24;

/// Track activity within an event weekend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    #[serde(rename = "FP1")]
    Practice1,
    #[serde(rename = "FP2")]
    Practice2,
    #[serde(rename = "FP3")]
    Practice3,
    #[serde(rename = "SQ")]
    SprintQualifying,
    #[serde(rename = "S")]
    Sprint,
    #[serde(rename = "Q")]
    Qualifying,
    #[serde(rename = "R")]
    Race,
}

impl SessionKind {
    /// Short identifier, also used as the snapshot file stem.
    pub fn code(self) -> &'static str {
        match self {
            SessionKind::Practice1 => "FP1",
            SessionKind::Practice2 => "FP2",
            SessionKind::Practice3 => "FP3",
            SessionKind::SprintQualifying => "SQ",
            SessionKind::Sprint => "S",
            SessionKind::Qualifying => "Q",
            SessionKind::Race => "R",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "FP1" => Some(SessionKind::Practice1),
            "FP2" => Some(SessionKind::Practice2),
            "FP3" => Some(SessionKind::Practice3),
            "SQ" => Some(SessionKind::SprintQualifying),
            "S" => Some(SessionKind::Sprint),
            "Q" => Some(SessionKind::Qualifying),
            "R" => Some(SessionKind::Race),
            _ => None,
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identifies one session: season, round and session kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SessionKey {
    year: u16,
    round: u8,
    kind: SessionKind,
}

impl SessionKey {
    /// Validated key. Seasons start at [`FIRST_SEASON`]; rounds run from 1 to [`MAX_ROUND`].
    pub fn new(year: u16, round: u8, kind: SessionKind) -> Result<Self> {
        if year < FIRST_SEASON {
            return Err(PitboardError::invalid_session_key(format!(
                "season {} predates available timing data ({} onwards)",
                year, FIRST_SEASON
            )));
        }
        if round == 0 || round > MAX_ROUND {
            return Err(PitboardError::invalid_session_key(format!(
                "round {} outside 1..={}",
                round, MAX_ROUND
            )));
        }
        Ok(Self { year, round, kind })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} round {} {}", self.year, self.round, self.kind)
    }
}

/// Everything known about one session at the time of export
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct SessionSnapshot {
    pub event: EventInfo,
    pub laps: Vec<LapRecord>,
    pub results: Vec<ResultRecord>,
    pub track_status: Vec<TrackStatusRecord>,
    pub race_control_messages: Vec<RaceControlMessage>,
}

impl SessionSnapshot {
    /// Parse a snapshot from YAML or JSON.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Err(PitboardError::parse_error("SessionSnapshot", "snapshot document is empty"));
        }
        let snapshot: SessionSnapshot = serde_yaml_ng::from_str(yaml).map_err(|e| {
            PitboardError::parse_error("SessionSnapshot deserialization", e.to_string())
        })?;
        debug!(
            event = %snapshot.event.event_name,
            laps = snapshot.laps.len(),
            results = snapshot.results.len(),
            messages = snapshot.race_control_messages.len(),
            "Parsed session snapshot"
        );
        Ok(snapshot)
    }

    /// Car number to driver code, from the results table.
    pub fn roster(&self) -> Vec<DriverRosterEntry> {
        self.results
            .iter()
            .filter(|r| !r.car_number.trim().is_empty() && !r.abbreviation.trim().is_empty())
            .map(|r| DriverRosterEntry::new(r.car_number.trim(), r.abbreviation.trim()))
            .collect()
    }

    /// Earliest known start time of every lap, ordered by lap number.
    ///
    /// Laps whose start time is missing for every driver still appear, with a
    /// missing start time.
    pub fn lap_timeline(&self) -> Vec<LapTimelineEntry> {
        let mut starts: BTreeMap<u32, Option<f64>> = BTreeMap::new();
        for lap in &self.laps {
            let start = lap.lap_start_time.seconds();
            let slot = starts.entry(lap.lap_number).or_insert(None);
            *slot = match (*slot, start) {
                (Some(known), Some(new)) => Some(known.min(new)),
                (known, new) => known.or(new),
            };
        }
        starts
            .into_iter()
            .map(|(lap, start)| LapTimelineEntry::new(lap, DurationValue::from(start)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
            && self.results.is_empty()
            && self.track_status.is_empty()
            && self.race_control_messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"
Event:
  Year: 2023
  RoundNumber: 4
  EventName: Azerbaijan Grand Prix
Laps:
  - { Driver: VER, LapNumber: 2, LapTime: 106.1, LapStartTime: 3701.0 }
  - { Driver: VER, LapNumber: 1, LapTime: 110.2, LapStartTime: 3590.8 }
  - { Driver: PER, LapNumber: 1, LapTime: 110.9, LapStartTime: 3590.3 }
  - { Driver: PER, LapNumber: 3, LapTime: null, LapStartTime: null }
Results:
  - { CarNumber: '1', Abbreviation: VER, Position: 2 }
  - { DriverNumber: '11', Abbreviation: PER, Position: 1 }
  - { CarNumber: '', Abbreviation: XXX }
RaceControlMessages:
  - Message: CAR 11 (PER) TIME PENALTY 5 SECONDS
    Time: 3650.0
"#;

    #[test]
    fn parses_feed_columns() {
        let snapshot = SessionSnapshot::parse(SNAPSHOT).unwrap();
        assert_eq!(snapshot.event.round_number, 4);
        assert_eq!(snapshot.laps.len(), 4);
        assert!(snapshot.laps[3].lap_time.is_missing());
        assert_eq!(snapshot.race_control_messages[0].session_time, Some(DurationValue::from_secs(3650.0)));
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn roster_skips_incomplete_rows() {
        let roster = SessionSnapshot::parse(SNAPSHOT).unwrap().roster();
        assert_eq!(
            roster,
            vec![DriverRosterEntry::new("1", "VER"), DriverRosterEntry::new("11", "PER")]
        );
    }

    #[test]
    fn timeline_uses_earliest_start_per_lap() {
        let timeline = SessionSnapshot::parse(SNAPSHOT).unwrap().lap_timeline();
        assert_eq!(
            timeline,
            vec![
                LapTimelineEntry::new(1, 3590.3),
                LapTimelineEntry::new(2, 3701.0),
                LapTimelineEntry::new(3, DurationValue::MISSING),
            ]
        );
    }

    #[test]
    fn empty_and_invalid_documents() {
        assert!(matches!(SessionSnapshot::parse(""), Err(PitboardError::Parse { .. })));
        assert!(matches!(
            SessionSnapshot::parse("Laps: not-a-list"),
            Err(PitboardError::Parse { .. })
        ));
    }

    #[test]
    fn session_key_validation() {
        assert!(SessionKey::new(2017, 1, SessionKind::Race).is_err());
        assert!(SessionKey::new(2024, 0, SessionKind::Race).is_err());
        assert!(SessionKey::new(2024, 25, SessionKind::Race).is_err());
        let key = SessionKey::new(2024, 6, SessionKind::Sprint).unwrap();
        assert_eq!(key.to_string(), "2024 round 6 S");
    }

    #[test]
    fn session_kind_codes() {
        assert_eq!(SessionKind::from_code("fp2"), Some(SessionKind::Practice2));
        assert_eq!(SessionKind::from_code("R"), Some(SessionKind::Race));
        assert_eq!(SessionKind::from_code("warmup"), None);
        let kind: SessionKind = serde_yaml_ng::from_str("SQ").unwrap();
        assert_eq!(kind, SessionKind::SprintQualifying);
    }
}
