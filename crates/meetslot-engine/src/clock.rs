//! Time-of-day values and minute-offset conversion.
//!
//! A clock value is either `"HH:MM"` or unspecified. Unspecified boundaries are
//! open: an unspecified start means 00:00 and an unspecified end means 24:00.
//! All times live in a single implicit local day of [`MINUTES_PER_DAY`] minutes.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// Minutes in one day. Also the exclusive end of every day's minute axis.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Literal used when a minute offset of [`MINUTES_PER_DAY`] is formatted.
pub const END_OF_DAY: &str = "24:00";

/// Which side of a range an unspecified clock value stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Unspecified resolves to 0 (00:00).
    Start,
    /// Unspecified resolves to 1440 (24:00).
    End,
}

/// A validated `HH:MM` time of day in `[00:00, 23:59]`.
///
/// Parsing is the only way to build one from text, so a malformed value never
/// reaches the interval arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    /// Build from an hour in `0..24` and a minute in `0..60`.
    pub fn hm(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self(hour * 60 + minute))
    }

    /// Build from a minute offset in `0..1440`.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    pub fn minute(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidClock(s.to_string());

        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let field = |part: &str| -> Result<u32> {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        Self::hm(field(h)?, field(m)?).ok_or_else(invalid)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Resolve an optional clock value to a minute offset in `[0, 1440]`.
pub fn to_minutes(value: Option<ClockTime>, edge: Edge) -> u32 {
    match (value, edge) {
        (Some(t), _) => t.minutes(),
        (None, Edge::Start) => 0,
        (None, Edge::End) => MINUTES_PER_DAY,
    }
}

/// Resolve a raw clock string (`"HH:MM"` or empty) to a minute offset.
///
/// # Errors
/// Returns `SlotError::InvalidClock` when a non-empty string is not a valid `HH:MM`.
pub fn parse_minutes(raw: &str, edge: Edge) -> Result<u32> {
    let value = if raw.trim().is_empty() {
        None
    } else {
        Some(raw.parse::<ClockTime>()?)
    };
    Ok(to_minutes(value, edge))
}

/// Format a minute offset as `HH:MM`. Offsets at or past the end of the day
/// render as `"24:00"`.
pub fn to_clock_string(minutes: u32) -> String {
    if minutes >= MINUTES_PER_DAY {
        return END_OF_DAY.to_string();
    }
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Serde adapter for `Option<ClockTime>` fields: `""`, `null`, or an absent
/// field all mean "unspecified", which serializes back as `""`.
pub(crate) mod optional {
    use super::ClockTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<ClockTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => serializer.collect_str(t),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ClockTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(de::Error::custom),
        }
    }
}
