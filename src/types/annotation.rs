//! Classification results for race-control messages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel rendered for any field the classifier could not determine.
pub const UNKNOWN: &str = "Unknown";

/// Broad topic of a race-control message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageCategory {
    Penalty,
    Investigation,
    SafetyCar,
    Flag,
    Drs,
    General,
}

impl MessageCategory {
    pub fn label(self) -> &'static str {
        match self {
            MessageCategory::Penalty => "Penalty",
            MessageCategory::Investigation => "Investigation",
            MessageCategory::SafetyCar => "Safety Car",
            MessageCategory::Flag => "Flag",
            MessageCategory::Drs => "DRS",
            MessageCategory::General => "General",
        }
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Sanction named in a penalty message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenaltyType {
    FiveSecondTime,
    TenSecondTime,
    ThirtySecondTime,
    GenericTime,
    Grid,
    StopAndGo,
    DriveThrough,
    Reprimand,
    Disqualification,
    Warning,
    None,
}

impl PenaltyType {
    pub fn label(self) -> &'static str {
        match self {
            PenaltyType::FiveSecondTime => "5s Time Penalty",
            PenaltyType::TenSecondTime => "10s Time Penalty",
            PenaltyType::ThirtySecondTime => "30s Time Penalty",
            PenaltyType::GenericTime => "Time Penalty",
            PenaltyType::Grid => "Grid Penalty",
            PenaltyType::StopAndGo => "Stop and Go",
            PenaltyType::DriveThrough => "Drive Through",
            PenaltyType::Reprimand => "Reprimand",
            PenaltyType::Disqualification => "Disqualification",
            PenaltyType::Warning => "Warning",
            PenaltyType::None => "None",
        }
    }

    /// Seconds added to the race time, for the time penalties that state one.
    pub fn added_seconds(self) -> Option<u32> {
        match self {
            PenaltyType::FiveSecondTime => Some(5),
            PenaltyType::TenSecondTime => Some(10),
            PenaltyType::ThirtySecondTime => Some(30),
            _ => None,
        }
    }
}

impl fmt::Display for PenaltyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Best-effort reading of a race-control message.
///
/// Every field is a hint. `None` means the heuristics found nothing and is
/// shown as [`UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyAnnotation {
    pub original_text: String,
    pub category: MessageCategory,
    pub penalty_type: PenaltyType,
    pub driver: Option<String>,
    pub car_number: Option<String>,
    pub lap: Option<u32>,
}

impl PenaltyAnnotation {
    pub fn driver_label(&self) -> &str {
        self.driver.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn car_number_label(&self) -> &str {
        self.car_number.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn lap_label(&self) -> String {
        self.lap.map_or_else(|| UNKNOWN.to_string(), |lap| lap.to_string())
    }

    /// Whether the message named an actual sanction.
    pub fn is_penalty(&self) -> bool {
        self.penalty_type != PenaltyType::None
    }
}
