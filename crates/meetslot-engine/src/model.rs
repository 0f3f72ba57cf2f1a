//! The in-memory event model: events, participants, and per-date availability.
//!
//! Field names serialize in camelCase (`dateStr`, `timeRanges`,
//! `candidateDates`) so the JSON matches what a browser host stores. Dates are
//! `chrono::NaiveDate`, which serializes as fixed-width `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::range::TimeRange;

/// How a participant's stored ranges are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Ranges are the times the participant CAN attend. No entry means unavailable.
    #[default]
    Whitelist,
    /// Ranges are the times the participant CANNOT attend. No entry means available.
    Blacklist,
}

impl Mode {
    pub fn opposite(self) -> Self {
        match self {
            Mode::Whitelist => Mode::Blacklist,
            Mode::Blacklist => Mode::Whitelist,
        }
    }
}

/// One participant's ranges and memo for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(rename = "dateStr")]
    pub date: NaiveDate,
    #[serde(default)]
    pub time_ranges: Vec<TimeRange>,
    #[serde(default)]
    pub memo: String,
}

impl Availability {
    /// An entry with no ranges and no memo.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            time_ranges: Vec::new(),
            memo: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mode: Mode,
    /// At most one entry per date.
    #[serde(default)]
    pub availabilities: Vec<Availability>,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, mode: Mode) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mode,
            availabilities: Vec::new(),
        }
    }

    pub fn availability_on(&self, date: NaiveDate) -> Option<&Availability> {
        self.availabilities.iter().find(|a| a.date == date)
    }

    /// Ranges recorded for `date`; empty when there is no entry.
    pub fn ranges_on(&self, date: NaiveDate) -> &[TimeRange] {
        self.availability_on(date)
            .map(|a| a.time_ranges.as_slice())
            .unwrap_or(&[])
    }

    /// Whether any date carries at least one range.
    pub fn has_ranges(&self) -> bool {
        self.availabilities.iter().any(|a| !a.time_ranges.is_empty())
    }
}

/// Parse a `YYYY-MM-DD` calendar date as a host sends it.
///
/// # Errors
/// Returns `SlotError::InvalidDate` for any other shape or an impossible date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| SlotError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Inclusive date range, used only when an event has no candidate dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Every date from `start` to `end` inclusive; empty when `start > end`.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Sorted ascending, distinct. Authoritative when non-empty.
    #[serde(default)]
    pub candidate_dates: Vec<NaiveDate>,
    pub period: Period,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Event {
    /// Create an event from the dates a host selected, in any order.
    ///
    /// # Errors
    /// Returns `SlotError::NoCandidateDates` when `selected_dates` is empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        selected_dates: &[NaiveDate],
    ) -> Result<Self> {
        let mut candidate_dates = selected_dates.to_vec();
        candidate_dates.sort_unstable();
        candidate_dates.dedup();

        let (Some(&start), Some(&end)) = (candidate_dates.first(), candidate_dates.last()) else {
            return Err(SlotError::NoCandidateDates);
        };

        Ok(Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            candidate_dates,
            period: Period { start, end },
            participants: Vec::new(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The dates this event is scheduled over: the candidate dates when any
    /// exist, else every day of the period.
    pub fn target_dates(&self) -> Vec<NaiveDate> {
        if self.candidate_dates.is_empty() {
            self.period.days()
        } else {
            self.candidate_dates.clone()
        }
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }
}
