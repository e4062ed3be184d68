//! Display boards built from a session snapshot
//!
//! Boards are plain row vectors with every duration already formatted, ready
//! for a table renderer. Building a board never fails; missing values render
//! as `"N/A"` or `"Unknown"`.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::classify::RaceControlClassifier;
use crate::format::{format_lap_time, format_race_time};
use crate::session::{EventInfo, LapRecord, SessionSnapshot, TrackStatusRecord};
use crate::types::{DurationValue, PenaltyAnnotation, TrackStatus};

/// One row of the all-laps table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapRow {
    pub driver: String,
    pub lap_number: u32,
    pub lap_time: String,
    pub compound: Option<String>,
    pub tyre_life: Option<u32>,
    pub track_status: Option<String>,
}

/// A driver's fastest timed lap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FastestLapRow {
    pub driver: String,
    pub lap_number: u32,
    pub lap_time: String,
    pub compound: Option<String>,
    /// Raw seconds, kept for charting and sorting
    pub seconds: f64,
}

/// One decoded track status change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackStatusRow {
    pub time: String,
    pub status: TrackStatus,
    pub description: String,
}

/// Everything the dashboard pages show for one session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionBoard {
    pub event: EventInfo,
    pub laps: Vec<LapRow>,
    pub fastest_laps: Vec<FastestLapRow>,
    pub track_status: Vec<TrackStatusRow>,
    pub race_control: Vec<PenaltyAnnotation>,
}

impl SessionBoard {
    /// Build every board with the standard classifier.
    pub fn build(snapshot: &SessionSnapshot) -> Self {
        Self::build_with(snapshot, &RaceControlClassifier::default())
    }

    pub fn build_with(snapshot: &SessionSnapshot, classifier: &RaceControlClassifier) -> Self {
        let board = Self {
            event: snapshot.event.clone(),
            laps: lap_table(&snapshot.laps),
            fastest_laps: fastest_laps(&snapshot.laps),
            track_status: track_status_rows(&snapshot.track_status),
            race_control: race_control_rows(snapshot, classifier),
        };
        debug!(
            event = %board.event.event_name,
            laps = board.laps.len(),
            drivers = board.fastest_laps.len(),
            penalties = board.penalties().count(),
            "Built session board"
        );
        board
    }

    /// Annotations that named an actual sanction.
    pub fn penalties(&self) -> impl Iterator<Item = &PenaltyAnnotation> {
        self.race_control.iter().filter(|a| a.is_penalty())
    }
}

/// All laps ordered by lap number, then driver.
pub fn lap_table(laps: &[LapRecord]) -> Vec<LapRow> {
    let mut sorted: Vec<&LapRecord> = laps.iter().collect();
    sorted.sort_by(|a, b| a.lap_number.cmp(&b.lap_number).then_with(|| a.driver.cmp(&b.driver)));
    sorted
        .into_iter()
        .map(|lap| LapRow {
            driver: lap.driver.clone(),
            lap_number: lap.lap_number,
            lap_time: format_lap_time(lap.lap_time),
            compound: lap.compound.clone(),
            tyre_life: lap.tyre_life,
            track_status: lap.track_status.clone(),
        })
        .collect()
}

/// Each driver's fastest timed lap, quickest first.
///
/// Drivers without a single timed lap are left out. Equal times keep the
/// earlier lap.
pub fn fastest_laps(laps: &[LapRecord]) -> Vec<FastestLapRow> {
    let mut best: HashMap<&str, (&LapRecord, f64)> = HashMap::new();
    for lap in laps {
        let Some(seconds) = lap.lap_time.seconds() else {
            continue;
        };
        best.entry(lap.driver.as_str())
            .and_modify(|(record, time)| {
                let quicker = seconds < *time || (seconds == *time && lap.lap_number < record.lap_number);
                if quicker {
                    *record = lap;
                    *time = seconds;
                }
            })
            .or_insert((lap, seconds));
    }

    let mut rows: Vec<FastestLapRow> = best
        .into_values()
        .map(|(lap, seconds)| FastestLapRow {
            driver: lap.driver.clone(),
            lap_number: lap.lap_number,
            lap_time: format_lap_time(DurationValue::from_secs(seconds)),
            compound: lap.compound.clone(),
            seconds,
        })
        .collect();
    rows.sort_by(|a, b| a.seconds.total_cmp(&b.seconds).then_with(|| a.driver.cmp(&b.driver)));
    rows
}

/// Track status changes in feed order, decoded.
pub fn track_status_rows(records: &[TrackStatusRecord]) -> Vec<TrackStatusRow> {
    records
        .iter()
        .map(|record| {
            let status = record.decoded();
            let description = match (&status, &record.message) {
                (TrackStatus::Unknown(_), Some(message)) => message.clone(),
                _ => status.description().to_string(),
            };
            TrackStatusRow { time: format_race_time(record.time), status, description }
        })
        .collect()
}

/// Race-control messages annotated against the snapshot's roster and timeline.
pub fn race_control_rows(
    snapshot: &SessionSnapshot,
    classifier: &RaceControlClassifier,
) -> Vec<PenaltyAnnotation> {
    let roster = snapshot.roster();
    let timeline = snapshot.lap_timeline();
    classifier.classify_all(&snapshot.race_control_messages, &roster, &timeline)
}
