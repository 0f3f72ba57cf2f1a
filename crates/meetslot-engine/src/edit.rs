//! Pure editing operations over the event model.
//!
//! Every operation returns a new value. An event's participant list is replaced
//! wholesale on save or delete, so readers never observe a half-edited
//! participant.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SlotError};
use crate::invert::invert;
use crate::model::{Availability, Event, Mode, Participant};
use crate::range::TimeRange;

impl Participant {
    /// The entry for `date`, or an empty one when nothing is recorded.
    pub fn day(&self, date: NaiveDate) -> Availability {
        self.availability_on(date)
            .cloned()
            .unwrap_or_else(|| Availability::empty(date))
    }

    /// Upsert the entry for `date`, applying `update` to the existing or a new
    /// empty entry.
    fn with_day(&self, date: NaiveDate, update: impl FnOnce(&mut Availability)) -> Self {
        let mut next = self.clone();
        match next.availabilities.iter_mut().find(|a| a.date == date) {
            Some(existing) => update(existing),
            None => {
                let mut entry = Availability::empty(date);
                update(&mut entry);
                next.availabilities.push(entry);
            }
        }
        next
    }

    pub fn with_day_ranges(&self, date: NaiveDate, ranges: Vec<TimeRange>) -> Self {
        self.with_day(date, |day| day.time_ranges = ranges)
    }

    pub fn with_memo(&self, date: NaiveDate, memo: impl Into<String>) -> Self {
        let memo = memo.into();
        self.with_day(date, |day| day.memo = memo)
    }

    /// Append a range to `date`. `None` appends an all-day range for the host
    /// to fill in.
    pub fn with_range_added(&self, date: NaiveDate, range: Option<TimeRange>) -> Self {
        let range = range.unwrap_or_default();
        self.with_day(date, |day| day.time_ranges.push(range))
    }

    /// Remove the range at `index` on `date`. Out-of-range indices change nothing.
    pub fn with_range_removed(&self, date: NaiveDate, index: usize) -> Self {
        self.with_day(date, |day| {
            if index < day.time_ranges.len() {
                day.time_ranges.remove(index);
            }
        })
    }

    /// Append `range` to every target date that falls on one of `weekdays`.
    pub fn with_weekly_range(
        &self,
        target_dates: &[NaiveDate],
        weekdays: &[Weekday],
        range: TimeRange,
    ) -> Self {
        target_dates
            .iter()
            .filter(|date| weekdays.contains(&date.weekday()))
            .fold(self.clone(), |acc, &date| {
                acc.with_range_added(date, Some(range))
            })
    }

    /// Switch the input mode.
    ///
    /// With `convert` set and at least one range entered, every target date's
    /// ranges are replaced by their inversion, so the participant keeps the same
    /// actual availability under the new mode. Dates with nothing entered invert
    /// to all-day. Memos are kept; entries outside `target_dates` are dropped.
    /// Without `convert`, or with nothing entered, only the mode changes.
    pub fn switch_mode(&self, new_mode: Mode, target_dates: &[NaiveDate], convert: bool) -> Self {
        if new_mode == self.mode {
            return self.clone();
        }

        let mut next = self.clone();
        next.mode = new_mode;

        if convert && self.has_ranges() {
            next.availabilities = target_dates
                .iter()
                .map(|&date| {
                    let current = self.day(date);
                    Availability {
                        date,
                        time_ranges: invert(&current.time_ranges),
                        memo: current.memo,
                    }
                })
                .collect();
            debug!(
                participant = %self.id,
                ?new_mode,
                dates = target_dates.len(),
                "converted ranges for mode switch"
            );
        }

        next
    }
}

/// A non-blank memo left by a participant for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMemo {
    pub name: String,
    pub memo: String,
}

impl Event {
    /// Save a participant: replace the one with the same id in place, or append.
    ///
    /// # Errors
    /// Returns `SlotError::EmptyName` when the name is blank.
    pub fn with_participant(&self, participant: Participant) -> Result<Self> {
        if participant.name.trim().is_empty() {
            return Err(SlotError::EmptyName);
        }

        let mut participants = self.participants.clone();
        match participants.iter().position(|p| p.id == participant.id) {
            Some(idx) => participants[idx] = participant,
            None => participants.push(participant),
        }

        Ok(Self {
            participants,
            ..self.clone()
        })
    }

    /// # Errors
    /// Returns `SlotError::UnknownParticipant` when no participant has `id`.
    pub fn without_participant(&self, id: &str) -> Result<Self> {
        if self.participant(id).is_none() {
            return Err(SlotError::UnknownParticipant(id.to_string()));
        }

        Ok(Self {
            participants: self
                .participants
                .iter()
                .filter(|p| p.id != id)
                .cloned()
                .collect(),
            ..self.clone()
        })
    }

    /// Switch one participant's mode, converting over this event's target dates.
    ///
    /// # Errors
    /// Returns `SlotError::UnknownParticipant` when no participant has `id`.
    pub fn with_mode_switched(&self, id: &str, new_mode: Mode, convert: bool) -> Result<Self> {
        let participant = self
            .participant(id)
            .ok_or_else(|| SlotError::UnknownParticipant(id.to_string()))?;
        let switched = participant.switch_mode(new_mode, &self.target_dates(), convert);
        self.with_participant(switched)
    }

    /// Memos left for `date`, in participant order. Blank memos are skipped.
    pub fn memos_for(&self, date: NaiveDate) -> Vec<DateMemo> {
        self.participants
            .iter()
            .filter_map(|p| {
                let memo = &p.availability_on(date)?.memo;
                (!memo.trim().is_empty()).then(|| DateMemo {
                    name: p.name.clone(),
                    memo: memo.clone(),
                })
            })
            .collect()
    }
}
