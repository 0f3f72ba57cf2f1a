//! Per-participant, per-slot availability.
//!
//! This is the one place where the two modes read "no data for this date"
//! differently: a whitelist participant with nothing entered is unavailable all
//! day, a blacklist participant with nothing entered is available all day.

use chrono::NaiveDate;

use crate::model::{Mode, Participant};
use crate::range::{MinuteSpan, TimeRange};

/// Whether `participant` can attend `slot` on `date`. Read-only.
pub fn is_available(participant: &Participant, date: NaiveDate, slot: MinuteSpan) -> bool {
    evaluate(participant.mode, participant.ranges_on(date), slot)
}

/// Decide availability from a mode and the ranges stored for one date.
pub fn evaluate(mode: Mode, ranges: &[TimeRange], slot: MinuteSpan) -> bool {
    match mode {
        Mode::Whitelist => !ranges.is_empty() && any_overlap(ranges, slot),
        Mode::Blacklist => ranges.is_empty() || !any_overlap(ranges, slot),
    }
}

/// True if any range overlaps the slot by more than zero minutes.
fn any_overlap(ranges: &[TimeRange], slot: MinuteSpan) -> bool {
    ranges.iter().any(|range| range.span().overlaps(&slot))
}
