//! Ranked aggregation of every participant over every slot of every target date.
//!
//! 1. Split each target date into fixed-width slots.
//! 2. Score each slot as `available / participants` and keep it when the score
//!    reaches the threshold.
//! 3. Merge runs of kept slots that share a date, touch, and have the same
//!    available count.
//! 4. Rank by score descending, then date ascending, then start ascending.
//!
//! The output is a pure projection of the event; it holds no reference back
//! into it and can be cached against the event value.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::{to_clock_string, MINUTES_PER_DAY};
use crate::config::AggregationConfig;
use crate::evaluate::is_available;
use crate::model::Event;
use crate::range::MinuteSpan;

/// One ranked result interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedSlot {
    #[serde(rename = "dateStr")]
    pub date: NaiveDate,
    pub start_min: u32,
    pub end_min: u32,
    /// Fraction of participants available, in `[0, 1]`.
    pub score: f64,
    pub available_count: usize,
    /// Names of participants who can attend, in participant order.
    pub attendees: Vec<String>,
    /// Names of participants who cannot attend, in participant order.
    pub absentees: Vec<String>,
}

impl AggregatedSlot {
    pub fn span(&self) -> MinuteSpan {
        MinuteSpan::new(self.start_min, self.end_min)
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::of(self.score)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.span().duration_minutes()
    }

    /// Ranking order: score descending, then date, then start time.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.date.cmp(&other.date))
            .then_with(|| self.start_min.cmp(&other.start_min))
    }
}

impl fmt::Display for AggregatedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}-{} {}/{}",
            self.tier().mark(),
            self.date.format("%Y-%m-%d"),
            self.date.format("%a"),
            to_clock_string(self.start_min),
            to_clock_string(self.end_min),
            self.available_count,
            self.available_count + self.absentees.len(),
        )
    }
}

/// Host-facing JSON view of a slot: every [`AggregatedSlot`] field plus
/// `start`/`end` clock strings (`"24:00"` at end of day) and the `tier`.
#[derive(Debug, Serialize)]
pub struct SlotView<'a> {
    #[serde(flatten)]
    pub slot: &'a AggregatedSlot,
    pub start: String,
    pub end: String,
    pub tier: ScoreTier,
}

impl<'a> From<&'a AggregatedSlot> for SlotView<'a> {
    fn from(slot: &'a AggregatedSlot) -> Self {
        Self {
            slot,
            start: to_clock_string(slot.start_min),
            end: to_clock_string(slot.end_min),
            tier: slot.tier(),
        }
    }
}

/// Coarse grouping of scores for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// Everyone can attend.
    All,
    /// At least three quarters can attend.
    Most,
    Partial,
}

impl ScoreTier {
    pub fn of(score: f64) -> Self {
        if score >= 1.0 {
            ScoreTier::All
        } else if score >= 0.75 {
            ScoreTier::Most
        } else {
            ScoreTier::Partial
        }
    }

    pub fn mark(self) -> &'static str {
        match self {
            ScoreTier::All => "◎",
            ScoreTier::Most => "○",
            ScoreTier::Partial => "△",
        }
    }
}

/// Aggregate with the default 15-minute slots and 0.5 threshold.
pub fn aggregate(event: &Event) -> Vec<AggregatedSlot> {
    aggregate_with(event, &AggregationConfig::default())
}

/// Aggregate with explicit slot width and threshold.
///
/// An event without participants yields an empty list.
#[tracing::instrument(
    skip_all,
    fields(event_id = %event.id, participants = event.participants.len())
)]
pub fn aggregate_with(event: &Event, config: &AggregationConfig) -> Vec<AggregatedSlot> {
    if event.participants.is_empty() {
        debug!("no participants; nothing to aggregate");
        return Vec::new();
    }

    let dates = event.target_dates();
    let retained: Vec<AggregatedSlot> = dates
        .iter()
        .flat_map(|&date| score_day(event, date, config))
        .collect();
    let retained_count = retained.len();

    let mut merged = merge_runs(retained);
    merged.sort_by(AggregatedSlot::rank_cmp);

    debug!(
        dates = dates.len(),
        retained = retained_count,
        merged = merged.len(),
        "aggregation complete"
    );
    merged
}

/// Score every slot of one date and keep those at or above the threshold.
fn score_day(event: &Event, date: NaiveDate, config: &AggregationConfig) -> Vec<AggregatedSlot> {
    let total = event.participants.len();
    let width = config.slot_minutes();

    (0..MINUTES_PER_DAY)
        .step_by(width as usize)
        .filter_map(|start| {
            let slot = MinuteSpan::new(start, start + width);
            let (attendees, absentees): (Vec<_>, Vec<_>) = event
                .participants
                .iter()
                .partition(|p| is_available(p, date, slot));

            let available_count = attendees.len();
            let score = available_count as f64 / total as f64;
            if score < config.threshold() {
                return None;
            }

            trace!(%date, %slot, available_count, "slot retained");
            Some(AggregatedSlot {
                date,
                start_min: slot.start,
                end_min: slot.end,
                score,
                available_count,
                attendees: attendees.iter().map(|p| p.name.clone()).collect(),
                absentees: absentees.iter().map(|p| p.name.clone()).collect(),
            })
        })
        .collect()
}

/// Merge consecutive slots in one left-to-right pass.
///
/// A slot joins the previous interval when both are on the same date, the
/// previous ends where it starts, and their available counts match. The merged
/// interval keeps the first slot's score and names. Input order is preserved.
pub fn merge_runs(slots: Vec<AggregatedSlot>) -> Vec<AggregatedSlot> {
    let mut merged: Vec<AggregatedSlot> = Vec::with_capacity(slots.len());
    for slot in slots {
        if let Some(last) = merged.last_mut() {
            if last.date == slot.date
                && last.end_min == slot.start_min
                && last.available_count == slot.available_count
            {
                last.end_min = slot.end_min;
                continue;
            }
        }
        merged.push(slot);
    }
    merged
}
