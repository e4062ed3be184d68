//! # Race-control message classification
//!
//! Turns free-form race-control text into a [`PenaltyAnnotation`]: a broad
//! category, the sanction named (if any), and the driver, car and lap the
//! message most likely concerns.
//!
//! ## Pipeline
//!
//! ```text
//! text ──► category rules ──► penalty gate ──┬─► (not gated) record driver/car only
//!                                            │
//!                                            └─► identity matchers
//!                                                penalty type rules
//!                                                lap locators
//! ```
//!
//! Each stage is an ordered rule list evaluated until one rule succeeds, so
//! precedence can be read straight from [`rules`], [`identity::standard_matchers`]
//! and [`lap::standard_locators`].
//!
//! ## Failure semantics
//!
//! Classification never fails. Anything the rules cannot determine stays
//! `None` and renders as `"Unknown"`. Output is a heuristic hint, not ground
//! truth: unusual phrasing will be mis-tagged or left unknown.
//!
//! ```rust
//! use pitboard::{classify, DriverRosterEntry, MessageCategory, PenaltyType, RaceControlMessage};
//!
//! let roster = vec![DriverRosterEntry::new("44", "HAM")];
//! let message = RaceControlMessage::new(
//!     "CAR 44 (HAM) TIME PENALTY 5 SECONDS FOR CAUSING A COLLISION ON LAP 12",
//! );
//! let annotation = classify(&message, &roster, &[]);
//! assert_eq!(annotation.category, MessageCategory::Penalty);
//! assert_eq!(annotation.penalty_type, PenaltyType::FiveSecondTime);
//! assert_eq!(annotation.car_number.as_deref(), Some("44"));
//! assert_eq!(annotation.lap, Some(12));
//! ```

use std::sync::LazyLock;
use tracing::trace;

use crate::types::{
    DriverRosterEntry, LapTimelineEntry, PenaltyAnnotation, PenaltyType, RaceControlMessage,
};

pub mod identity;
pub mod lap;
pub mod rules;
mod text;

pub use identity::{Identity, IdentityMatcher};
pub use lap::LapLocator;

/// Everything a rule may look at while classifying one message.
pub struct MessageContext<'a> {
    pub message: &'a RaceControlMessage,
    /// ASCII-lower-cased text, byte-aligned with `message.text`
    pub lower: String,
    pub roster: &'a [DriverRosterEntry],
    pub timeline: &'a [LapTimelineEntry],
}

impl<'a> MessageContext<'a> {
    pub fn new(
        message: &'a RaceControlMessage,
        roster: &'a [DriverRosterEntry],
        timeline: &'a [LapTimelineEntry],
    ) -> Self {
        Self { message, lower: message.text.to_ascii_lowercase(), roster, timeline }
    }
}

/// Classifier holding its identity and lap rule chains.
///
/// [`RaceControlClassifier::default`] uses the standard chains; extra rules
/// can be appended and run after the built-in ones.
pub struct RaceControlClassifier {
    identity: Vec<Box<dyn IdentityMatcher>>,
    laps: Vec<Box<dyn LapLocator>>,
}

impl Default for RaceControlClassifier {
    fn default() -> Self {
        Self { identity: identity::standard_matchers(), laps: lap::standard_locators() }
    }
}

impl std::fmt::Debug for RaceControlClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RaceControlClassifier")
            .field("identity", &self.identity.iter().map(|m| m.name()).collect::<Vec<_>>())
            .field("laps", &self.laps.iter().map(|l| l.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl RaceControlClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an identity matcher after the existing ones.
    pub fn with_identity_matcher(mut self, matcher: impl IdentityMatcher + 'static) -> Self {
        self.identity.push(Box::new(matcher));
        self
    }

    /// Append a lap locator after the existing ones.
    pub fn with_lap_locator(mut self, locator: impl LapLocator + 'static) -> Self {
        self.laps.push(Box::new(locator));
        self
    }

    /// Classify a single message.
    pub fn classify(
        &self,
        message: &RaceControlMessage,
        roster: &[DriverRosterEntry],
        timeline: &[LapTimelineEntry],
    ) -> PenaltyAnnotation {
        let ctx = MessageContext::new(message, roster, timeline);
        let category = rules::categorize(&ctx.lower);

        if !rules::is_gated(&ctx.lower) {
            trace!(%category, "Message not gated as a penalty");
            return PenaltyAnnotation {
                original_text: message.text.clone(),
                category,
                penalty_type: PenaltyType::None,
                driver: identity::non_empty(message.driver.as_ref()).map(str::to_string),
                car_number: identity::non_empty(message.car_number.as_ref()).map(str::to_string),
                lap: None,
            };
        }

        let Identity { driver, car_number } = identity::identify(&self.identity, &ctx);
        let penalty_type = rules::penalty_type(&ctx.lower);
        let lap = lap::locate(&self.laps, &ctx);
        trace!(%category, %penalty_type, ?lap, "Classified penalty message");

        PenaltyAnnotation {
            original_text: message.text.clone(),
            category,
            penalty_type,
            driver,
            car_number,
            lap,
        }
    }

    /// Classify every message against the same roster and timeline.
    pub fn classify_all(
        &self,
        messages: &[RaceControlMessage],
        roster: &[DriverRosterEntry],
        timeline: &[LapTimelineEntry],
    ) -> Vec<PenaltyAnnotation> {
        messages.iter().map(|m| self.classify(m, roster, timeline)).collect()
    }
}

static STANDARD: LazyLock<RaceControlClassifier> = LazyLock::new(RaceControlClassifier::default);

/// Classify a message with the standard rule chains.
pub fn classify(
    message: &RaceControlMessage,
    roster: &[DriverRosterEntry],
    timeline: &[LapTimelineEntry],
) -> PenaltyAnnotation {
    STANDARD.classify(message, roster, timeline)
}
