//! Slot keys and the fixed exam-day time grid.
//!
//! A slot key pairs one exam date with one of the eight fixed time-slot
//! labels. In memory it is a proper composite key; on the wire it is the
//! flat string `"<date>_<slot>"` with a single underscore after the date.
//! Dates are `YYYY-MM-DD` and slot labels contain no underscore, so
//! splitting on the first `_` is unambiguous.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The fixed time-slot labels, in grid order. Constant for the whole system.
pub const TIME_SLOTS: [&str; 8] = [
    "7:30 AM-9:00 AM",
    "9:00 AM-10:30 AM",
    "10:30 AM-12:00 PM",
    "12:00 PM-1:30 PM",
    "1:30 PM-3:00 PM",
    "3:00 PM-4:30 PM",
    "4:30 PM-6:00 PM",
    "6:00 PM-7:30 PM",
];

/// Separator between date and slot label in the wire form of a key.
pub const KEY_SEPARATOR: char = '_';

/// Maximum number of exam days a date picker may submit in one selection.
pub const MAX_EXAM_DAYS: usize = 5;

/// Composite key for one cell of the schedule grid: an exam date plus a
/// time-slot label.
///
/// Replaces ad-hoc string concatenation as the map key; equality and
/// hashing are field-wise, so key contents can never collide through the
/// separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    /// Exam date (`YYYY-MM-DD`).
    pub date: String,
    /// Time-slot label (one of [`TIME_SLOTS`] in practice).
    pub slot: String,
}

/// Error parsing a wire-form slot key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("slot key '{0}' is missing the date separator")]
pub struct InvalidSlotKey(pub String);

impl SlotKey {
    /// Creates a new slot key.
    pub fn new(date: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            slot: slot.into(),
        }
    }

    /// Whether this key falls on the given date.
    #[inline]
    pub fn is_on(&self, date: &str) -> bool {
        self.date == date
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.date, KEY_SEPARATOR, self.slot)
    }
}

impl FromStr for SlotKey {
    type Err = InvalidSlotKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(KEY_SEPARATOR) {
            Some((date, slot)) if !date.is_empty() => Ok(Self::new(date, slot)),
            _ => Err(InvalidSlotKey(s.to_string())),
        }
    }
}

// Serialized as the flat wire string so schedule maps keep the
// "<date>_<slot>" key shape.
impl Serialize for SlotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// One row of the date-picker dialog: a chosen date with half-day flags.
///
/// The engine consumes only the date value; the AM/PM flags are picker
/// state carried through for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamDay {
    /// Exam date (`YYYY-MM-DD`).
    pub date: String,
    /// Morning half selected.
    pub am: bool,
    /// Afternoon half selected.
    pub pm: bool,
}

impl ExamDay {
    /// Creates a full-day selection for the given date.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            am: true,
            pm: true,
        }
    }
}
