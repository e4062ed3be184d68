//! Keyword rule tables for message category, the penalty gate and penalty type
//!
//! Rules are evaluated top to bottom and the first match wins.

use super::text::{contains_any, contains_term};
use crate::types::{MessageCategory, PenaltyType};

/// Outcome selected when any of the terms occurs in the lower-cased text.
pub struct KeywordRule<T: 'static> {
    pub outcome: T,
    pub any_of: &'static [&'static str],
}

/// Outcome selected when every group has at least one term in the text.
pub struct PenaltyRule {
    pub outcome: PenaltyType,
    pub all_of: &'static [&'static [&'static str]],
}

pub const PENALTY_KEYWORDS: &[&str] =
    &["penalty", "penalised", "penalized", "time penalty", "grid penalty"];

/// Messages worth extracting a penalty annotation from.
pub const PENALTY_GATE: &[&str] =
    &["penalty", "penalised", "penalized", "time penalty", "grid penalty", "reprimand"];

pub const CATEGORY_RULES: &[KeywordRule<MessageCategory>] = &[
    KeywordRule { outcome: MessageCategory::Penalty, any_of: PENALTY_KEYWORDS },
    KeywordRule {
        outcome: MessageCategory::Investigation,
        any_of: &["investigation", "incident", "noted"],
    },
    KeywordRule {
        outcome: MessageCategory::SafetyCar,
        any_of: &["safety car", "virtual safety car", "vsc"],
    },
    KeywordRule { outcome: MessageCategory::Flag, any_of: &["flag", "yellow", "red", "green"] },
    KeywordRule { outcome: MessageCategory::Drs, any_of: &["drs", "enabled", "disabled"] },
];

const TIME_PENALTY: &[&str] = &["time penalty"];

pub const PENALTY_RULES: &[PenaltyRule] = &[
    PenaltyRule { outcome: PenaltyType::FiveSecondTime, all_of: &[TIME_PENALTY, &["5 sec", "5-sec"]] },
    PenaltyRule { outcome: PenaltyType::TenSecondTime, all_of: &[TIME_PENALTY, &["10 sec", "10-sec"]] },
    PenaltyRule {
        outcome: PenaltyType::ThirtySecondTime,
        all_of: &[TIME_PENALTY, &["30 sec", "30-sec"]],
    },
    PenaltyRule { outcome: PenaltyType::GenericTime, all_of: &[TIME_PENALTY] },
    PenaltyRule { outcome: PenaltyType::Grid, all_of: &[&["grid penalty"]] },
    PenaltyRule { outcome: PenaltyType::StopAndGo, all_of: &[&["stop and go", "stop-and-go"]] },
    PenaltyRule { outcome: PenaltyType::DriveThrough, all_of: &[&["drive through", "drive-through"]] },
    PenaltyRule { outcome: PenaltyType::Reprimand, all_of: &[&["reprimand"]] },
    PenaltyRule { outcome: PenaltyType::Disqualification, all_of: &[&["disqualified", "dsq"]] },
    PenaltyRule { outcome: PenaltyType::Warning, all_of: &[&["warning"]] },
];

pub fn categorize(lower: &str) -> MessageCategory {
    CATEGORY_RULES
        .iter()
        .find(|rule| contains_any(lower, rule.any_of))
        .map_or(MessageCategory::General, |rule| rule.outcome)
}

pub fn is_gated(lower: &str) -> bool {
    contains_any(lower, PENALTY_GATE)
}

pub fn penalty_type(lower: &str) -> PenaltyType {
    PENALTY_RULES
        .iter()
        .find(|rule| rule.all_of.iter().all(|group| group.iter().any(|t| contains_term(lower, t))))
        .map_or(PenaltyType::None, |rule| rule.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_precedence() {
        assert_eq!(categorize("car 1 time penalty under investigation"), MessageCategory::Penalty);
        assert_eq!(categorize("incident noted during safety car"), MessageCategory::Investigation);
        assert_eq!(categorize("virtual safety car deployed"), MessageCategory::SafetyCar);
        assert_eq!(categorize("vsc ending"), MessageCategory::SafetyCar);
        assert_eq!(categorize("double yellow in sector 2"), MessageCategory::Flag);
        assert_eq!(categorize("drs enabled"), MessageCategory::Drs);
        assert_eq!(categorize("pit exit open"), MessageCategory::General);
    }

    #[test]
    fn gate_includes_reprimand_only_beyond_penalty_words() {
        assert!(is_gated("car 4 penalised"));
        assert!(is_gated("reprimand for car 31"));
        assert!(!is_gated("car 11 disqualified"));
        assert!(!is_gated("black and white flag warning"));
    }

    #[test]
    fn time_penalty_durations() {
        assert_eq!(penalty_type("5 sec time penalty"), PenaltyType::FiveSecondTime);
        assert_eq!(penalty_type("10-sec time penalty"), PenaltyType::TenSecondTime);
        assert_eq!(penalty_type("time penalty 30 seconds"), PenaltyType::ThirtySecondTime);
        assert_eq!(penalty_type("15 second time penalty"), PenaltyType::GenericTime);
        assert_eq!(penalty_type("time penalty"), PenaltyType::GenericTime);
    }

    #[test]
    fn other_sanctions_in_order() {
        assert_eq!(penalty_type("3 place grid penalty"), PenaltyType::Grid);
        assert_eq!(penalty_type("stop-and-go penalty"), PenaltyType::StopAndGo);
        assert_eq!(penalty_type("drive through penalty"), PenaltyType::DriveThrough);
        assert_eq!(penalty_type("reprimand"), PenaltyType::Reprimand);
        assert_eq!(penalty_type("penalty: dsq"), PenaltyType::Disqualification);
        assert_eq!(penalty_type("penalty warning"), PenaltyType::Warning);
        assert_eq!(penalty_type("penalty served"), PenaltyType::None);
    }

    #[test]
    fn duration_needs_time_penalty() {
        // "5 sec" alone is not a time penalty
        assert_eq!(penalty_type("penalty 5 sec grid penalty"), PenaltyType::Grid);
    }
}
