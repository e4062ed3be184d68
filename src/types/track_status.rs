//! Track status codes published on the timing feed
//!
//! The feed encodes track state as single-digit strings. Code `3` is unused.

use serde::{Deserialize, Serialize};

pub mod codes {
    pub const ALL_CLEAR: &str = "1";
    pub const YELLOW: &str = "2";
    pub const SAFETY_CAR: &str = "4";
    pub const RED: &str = "5";
    pub const VSC_DEPLOYED: &str = "6";
    pub const VSC_ENDING: &str = "7";
}

/// Decoded track status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackStatus {
    AllClear,
    Yellow,
    SafetyCar,
    Red,
    VscDeployed,
    VscEnding,
    Unknown(String),
}

impl TrackStatus {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            codes::ALL_CLEAR => TrackStatus::AllClear,
            codes::YELLOW => TrackStatus::Yellow,
            codes::SAFETY_CAR => TrackStatus::SafetyCar,
            codes::RED => TrackStatus::Red,
            codes::VSC_DEPLOYED => TrackStatus::VscDeployed,
            codes::VSC_ENDING => TrackStatus::VscEnding,
            other => TrackStatus::Unknown(other.to_string()),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            TrackStatus::AllClear => "Track clear",
            TrackStatus::Yellow => "Yellow flag",
            TrackStatus::SafetyCar => "Safety car deployed",
            TrackStatus::Red => "Red flag",
            TrackStatus::VscDeployed => "Virtual safety car deployed",
            TrackStatus::VscEnding => "Virtual safety car ending",
            TrackStatus::Unknown(_) => "Unknown status",
        }
    }

    /// Whether racing is neutralised or stopped.
    pub fn is_neutralised(&self) -> bool {
        matches!(
            self,
            TrackStatus::SafetyCar | TrackStatus::Red | TrackStatus::VscDeployed | TrackStatus::VscEnding
        )
    }
}
