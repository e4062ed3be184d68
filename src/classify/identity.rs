//! Driver and car identification for penalty messages
//!
//! Matchers run in order and the first one to return an [`Identity`] wins:
//! the record's own driver, the record's car number, a car number mentioned
//! in the text, then a driver name or code mentioned in the text.

use tracing::trace;

use super::MessageContext;
use super::text::{digits_at, skip_spaces, word_at, words};
use crate::types::DriverRosterEntry;

/// Upper-case three-letter words that show up in race-control text but are
/// never driver codes.
const NOT_DRIVER_CODES: &[&str] = &[
    "ALL", "AND", "ARE", "BUT", "CAR", "DNF", "DRS", "DSQ", "DUE", "END", "FIA", "FOR", "GMT",
    "HAS", "LAP", "NEW", "NOT", "OFF", "ONE", "OUT", "PIT", "RED", "SEC", "SET", "THE", "TWO",
    "UTC", "VSC", "WAS", "YES",
];

/// Who a message is about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub driver: Option<String>,
    pub car_number: Option<String>,
}

/// One strategy for working out who a penalty message concerns.
pub trait IdentityMatcher: Send + Sync {
    /// Short name used in trace output
    fn name(&self) -> &'static str;

    /// Identify the implicated car/driver, or `None` to defer to the next matcher.
    fn identify(&self, ctx: &MessageContext<'_>) -> Option<Identity>;
}

/// Label of the car with exactly this number.
pub fn driver_for_car<'a>(roster: &'a [DriverRosterEntry], car_number: &str) -> Option<&'a str> {
    roster.iter().find(|e| e.car_number == car_number).map(|e| e.driver_label.as_str())
}

/// Number of the car driven by exactly this label.
pub fn car_for_driver<'a>(roster: &'a [DriverRosterEntry], driver: &str) -> Option<&'a str> {
    roster.iter().find(|e| e.driver_label == driver).map(|e| e.car_number.as_str())
}

pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn from_car(roster: &[DriverRosterEntry], car_number: &str) -> Identity {
    Identity {
        driver: driver_for_car(roster, car_number).map(str::to_string),
        car_number: Some(car_number.to_string()),
    }
}

fn from_driver(roster: &[DriverRosterEntry], driver: &str) -> Identity {
    Identity {
        driver: Some(driver.to_string()),
        car_number: car_for_driver(roster, driver).map(str::to_string),
    }
}

/// Driver supplied on the record.
pub struct RecordDriver;

impl IdentityMatcher for RecordDriver {
    fn name(&self) -> &'static str {
        "record-driver"
    }

    fn identify(&self, ctx: &MessageContext<'_>) -> Option<Identity> {
        let driver = non_empty(ctx.message.driver.as_ref())?;
        let mut identity = from_driver(ctx.roster, driver);
        if let Some(car) = non_empty(ctx.message.car_number.as_ref()) {
            identity.car_number = Some(car.to_string());
        }
        Some(identity)
    }
}

/// Car number supplied on the record, resolved against the roster.
pub struct RecordCarNumber;

impl IdentityMatcher for RecordCarNumber {
    fn name(&self) -> &'static str {
        "record-car-number"
    }

    fn identify(&self, ctx: &MessageContext<'_>) -> Option<Identity> {
        let car = non_empty(ctx.message.car_number.as_ref())?;
        Some(from_car(ctx.roster, car))
    }
}

/// `car 44`, `#44` or `no. 44` in the text; the earliest mention wins.
pub struct TextCarNumber;

impl TextCarNumber {
    fn number_at(lower: &str, at: usize) -> Option<&str> {
        let bytes = lower.as_bytes();
        if bytes[at] == b'#' {
            return digits_at(lower, at + 1).map(|(d, _)| d);
        }
        if word_at(bytes, at, b"car") {
            let after = at + 3;
            let start = skip_spaces(bytes, after);
            if start == after {
                return None;
            }
            return digits_at(lower, start).map(|(d, _)| d);
        }
        if word_at(bytes, at, b"no") {
            let mut start = at + 2;
            if bytes.get(start) == Some(&b'.') {
                start += 1;
            }
            let start = skip_spaces(bytes, start);
            return digits_at(lower, start).map(|(d, _)| d);
        }
        None
    }

    pub fn find(lower: &str) -> Option<&str> {
        (0..lower.len()).find_map(|at| Self::number_at(lower, at))
    }
}

impl IdentityMatcher for TextCarNumber {
    fn name(&self) -> &'static str {
        "text-car-number"
    }

    fn identify(&self, ctx: &MessageContext<'_>) -> Option<Identity> {
        let car = Self::find(&ctx.lower)?;
        Some(from_car(ctx.roster, car))
    }
}

/// `First Last` in the text, falling back to a three-letter code like `HAM`.
pub struct TextDriverName;

impl TextDriverName {
    fn is_capitalized(word: &str) -> bool {
        let bytes = word.as_bytes();
        bytes.len() >= 2
            && bytes[0].is_ascii_uppercase()
            && bytes[1..].iter().all(u8::is_ascii_lowercase)
    }

    fn is_driver_code(word: &str) -> bool {
        word.len() == 3
            && word.bytes().all(|b| b.is_ascii_uppercase())
            && !NOT_DRIVER_CODES.contains(&word)
    }

    pub fn full_name(text: &str) -> Option<&str> {
        let bytes = text.as_bytes();
        words(text).windows(2).find_map(|pair| {
            let (first_at, first) = pair[0];
            let (second_at, second) = pair[1];
            let first_end = first_at + first.len();
            let adjacent = second_at == first_end + 1 && bytes[first_end] == b' ';
            (adjacent && Self::is_capitalized(first) && Self::is_capitalized(second))
                .then(|| &text[first_at..second_at + second.len()])
        })
    }

    pub fn code(text: &str) -> Option<&str> {
        words(text).into_iter().map(|(_, word)| word).find(|word| Self::is_driver_code(word))
    }
}

impl IdentityMatcher for TextDriverName {
    fn name(&self) -> &'static str {
        "text-driver-name"
    }

    fn identify(&self, ctx: &MessageContext<'_>) -> Option<Identity> {
        let text = ctx.message.text.as_str();
        let driver = Self::full_name(text).or_else(|| Self::code(text))?;
        Some(from_driver(ctx.roster, driver))
    }
}

/// The standard matcher chain in precedence order.
pub fn standard_matchers() -> Vec<Box<dyn IdentityMatcher>> {
    vec![
        Box::new(RecordDriver),
        Box::new(RecordCarNumber),
        Box::new(TextCarNumber),
        Box::new(TextDriverName),
    ]
}

pub(crate) fn identify(
    matchers: &[Box<dyn IdentityMatcher>],
    ctx: &MessageContext<'_>,
) -> Identity {
    for matcher in matchers {
        if let Some(identity) = matcher.identify(ctx) {
            trace!(
                matcher = matcher.name(),
                driver = ?identity.driver,
                car_number = ?identity.car_number,
                "Identified message subject"
            );
            return identity;
        }
    }
    Identity::default()
}
