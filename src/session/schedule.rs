//! Season event schedule

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::EventInfo;
use crate::{PitboardError, Result};

/// All events of one season
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct EventSchedule {
    pub year: u16,
    pub events: Vec<EventInfo>,
}

impl EventSchedule {
    /// Parse a schedule from YAML or JSON.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Err(PitboardError::parse_error("EventSchedule", "schedule document is empty"));
        }
        let schedule: EventSchedule = serde_yaml_ng::from_str(yaml).map_err(|e| {
            PitboardError::parse_error("EventSchedule deserialization", e.to_string())
        })?;
        debug!(year = schedule.year, events = schedule.events.len(), "Parsed event schedule");
        Ok(schedule)
    }

    /// The event for a round, if the season has one.
    pub fn round(&self, round_number: u8) -> Option<&EventInfo> {
        self.events.iter().find(|e| e.round_number == round_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE: &str = r#"
Year: 2024
Events:
  - RoundNumber: 1
    EventName: Bahrain Grand Prix
    Country: Bahrain
    EventFormat: conventional
  - RoundNumber: 6
    EventName: Miami Grand Prix
    Country: United States
    EventFormat: sprint
"#;

    #[test]
    fn finds_round() {
        let schedule = EventSchedule::parse(SCHEDULE).unwrap();
        let miami = schedule.round(6).expect("round 6 is scheduled");
        assert_eq!(miami.event_name, "Miami Grand Prix");
        assert_eq!(miami.event_format.as_deref(), Some("sprint"));
    }

    #[test]
    fn unscheduled_round_is_none() {
        let schedule = EventSchedule::parse(SCHEDULE).unwrap();
        assert!(schedule.round(23).is_none());
    }

    #[test]
    fn empty_document_is_a_parse_error() {
        assert!(matches!(EventSchedule::parse("  \n"), Err(PitboardError::Parse { .. })));
    }
}
