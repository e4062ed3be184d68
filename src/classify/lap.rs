//! Lap attribution for penalty messages

use tracing::trace;

use super::MessageContext;
use super::text::{digits_at, is_word_byte, skip_spaces, word_at};
use crate::types::LapTimelineEntry;

/// One strategy for working out which lap a message refers to.
pub trait LapLocator: Send + Sync {
    /// Short name used in trace output
    fn name(&self) -> &'static str;

    fn locate(&self, ctx: &MessageContext<'_>) -> Option<u32>;
}

/// `lap 12` anywhere in the text, which also covers `on/at/during/in lap 12`.
pub struct TextLap;

impl TextLap {
    pub fn find(lower: &str) -> Option<u32> {
        let bytes = lower.as_bytes();
        (0..bytes.len()).find_map(|at| {
            if !word_at(bytes, at, b"lap") {
                return None;
            }
            let start = skip_spaces(bytes, at + 3);
            digits_at(lower, start).and_then(|(digits, _)| digits.parse().ok())
        })
    }
}

impl LapLocator for TextLap {
    fn name(&self) -> &'static str {
        "text-lap"
    }

    fn locate(&self, ctx: &MessageContext<'_>) -> Option<u32> {
        Self::find(&ctx.lower)
    }
}

/// Compact `L12` written as a standalone word.
pub struct CompactLap;

impl CompactLap {
    pub fn find(lower: &str) -> Option<u32> {
        let bytes = lower.as_bytes();
        (0..bytes.len()).find_map(|at| {
            if !word_at(bytes, at, b"l") {
                return None;
            }
            let (digits, end) = digits_at(lower, at + 1)?;
            if bytes.get(end).copied().is_some_and(is_word_byte) {
                return None;
            }
            digits.parse().ok()
        })
    }
}

impl LapLocator for CompactLap {
    fn name(&self) -> &'static str {
        "compact-lap"
    }

    fn locate(&self, ctx: &MessageContext<'_>) -> Option<u32> {
        Self::find(&ctx.lower)
    }
}

/// Lap in progress at the message's session time.
pub struct TimelineLap;

impl TimelineLap {
    /// Lap with the greatest start time not after `session_time`.
    ///
    /// Entries without a start time are ignored; equal start times resolve to
    /// the higher lap number.
    pub fn lap_at(timeline: &[LapTimelineEntry], session_time: f64) -> Option<u32> {
        timeline
            .iter()
            .filter_map(|entry| entry.lap_start_time.seconds().map(|start| (start, entry.lap_number)))
            .filter(|(start, _)| *start <= session_time)
            .max_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, lap)| lap)
    }
}

impl LapLocator for TimelineLap {
    fn name(&self) -> &'static str {
        "timeline-lap"
    }

    fn locate(&self, ctx: &MessageContext<'_>) -> Option<u32> {
        let session_time = ctx.message.session_time?.seconds()?;
        Self::lap_at(ctx.timeline, session_time)
    }
}

/// The standard locator chain in precedence order.
pub fn standard_locators() -> Vec<Box<dyn LapLocator>> {
    vec![Box::new(TextLap), Box::new(CompactLap), Box::new(TimelineLap)]
}

pub(crate) fn locate(locators: &[Box<dyn LapLocator>], ctx: &MessageContext<'_>) -> Option<u32> {
    locators.iter().find_map(|locator| {
        let lap = locator.locate(ctx)?;
        trace!(locator = locator.name(), lap, "Located message lap");
        Some(lap)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DurationValue;

    fn timeline() -> Vec<LapTimelineEntry> {
        vec![
            LapTimelineEntry::new(1, 3600.0),
            LapTimelineEntry::new(2, 3695.2),
            LapTimelineEntry::new(3, 3788.9),
            LapTimelineEntry::new(4, DurationValue::MISSING),
        ]
    }

    #[test]
    fn text_lap_forms() {
        assert_eq!(TextLap::find("collision on lap 12"), Some(12));
        assert_eq!(TextLap::find("during lap 3 and lap 4"), Some(3));
        assert_eq!(TextLap::find("lap12 incident"), Some(12));
        assert_eq!(TextLap::find("overlap 5"), None);
        assert_eq!(TextLap::find("lap times deleted"), None);
    }

    #[test]
    fn compact_lap_form() {
        assert_eq!(CompactLap::find("t4 l27 track limits"), Some(27));
        assert_eq!(CompactLap::find("fl1 l2x"), None);
        assert_eq!(CompactLap::find("l44"), Some(44));
    }

    #[test]
    fn timeline_picks_lap_in_progress() {
        let timeline = timeline();
        assert_eq!(TimelineLap::lap_at(&timeline, 3599.0), None);
        assert_eq!(TimelineLap::lap_at(&timeline, 3600.0), Some(1));
        assert_eq!(TimelineLap::lap_at(&timeline, 3700.0), Some(2));
        assert_eq!(TimelineLap::lap_at(&timeline, 9000.0), Some(3));
    }

    #[test]
    fn timeline_ties_go_to_later_lap() {
        let timeline = vec![LapTimelineEntry::new(7, 100.0), LapTimelineEntry::new(8, 100.0)];
        assert_eq!(TimelineLap::lap_at(&timeline, 150.0), Some(8));
    }
}
