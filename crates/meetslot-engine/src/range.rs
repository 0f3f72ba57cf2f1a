//! Time ranges within one day and their normalization.
//!
//! A [`TimeRange`] is what a participant enters: two optional clock values.
//! A [`MinuteSpan`] is the resolved half-open `[start, end)` minute interval
//! the arithmetic works on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::{self, to_minutes, ClockTime, Edge, MINUTES_PER_DAY};

/// A participant-entered range. Either bound may be left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(default, with = "clock::optional")]
    pub start: Option<ClockTime>,
    #[serde(default, with = "clock::optional")]
    pub end: Option<ClockTime>,
}

impl TimeRange {
    pub fn new(start: Option<ClockTime>, end: Option<ClockTime>) -> Self {
        Self { start, end }
    }

    /// The whole day, with both bounds open.
    pub fn all_day() -> Self {
        Self::default()
    }

    /// Resolve both bounds to minutes. Open bounds become 0 and 1440.
    ///
    /// A range whose start is after its end is kept as-is; it overlaps nothing.
    pub fn span(&self) -> MinuteSpan {
        MinuteSpan {
            start: to_minutes(self.start, Edge::Start),
            end: to_minutes(self.end, Edge::End),
        }
    }

    /// Render a minute span back into a range. A start of 0 and an end of 1440
    /// become open bounds.
    pub fn from_span(span: MinuteSpan) -> Self {
        let start = match span.start {
            0 => None,
            m => ClockTime::from_minutes(m),
        };
        let end = match span.end {
            MINUTES_PER_DAY => None,
            m => ClockTime::from_minutes(m),
        };
        Self { start, end }
    }

    /// Human-readable label for display next to an entered range.
    pub fn label(&self) -> String {
        match (self.start, self.end) {
            (None, None) => format!("all day (00:00 - {})", clock::END_OF_DAY),
            (None, Some(end)) => format!("until {end}"),
            (Some(start), None) => format!("from {start}"),
            (Some(start), Some(end)) => format!("{start} - {end}"),
        }
    }
}

/// A resolved half-open minute interval `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MinuteSpan {
    pub start: u32,
    pub end: u32,
}

impl MinuteSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Strict overlap test: `max(starts) < min(ends)`.
    ///
    /// Spans that only touch do not overlap, and an inverted span overlaps nothing.
    pub fn overlaps(&self, other: &MinuteSpan) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for MinuteSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            clock::to_clock_string(self.start),
            clock::to_clock_string(self.end)
        )
    }
}

/// Merge a day's ranges into a minimal, sorted, disjoint set of minute spans.
///
/// Ranges are ordered by start (stable, so equal starts keep input order), then
/// folded in one pass: a range whose start is at or before the running span's
/// end extends it, otherwise it opens a new span. Touching ranges merge.
pub fn merge_spans(ranges: &[TimeRange]) -> Vec<MinuteSpan> {
    let mut spans: Vec<MinuteSpan> = ranges.iter().map(TimeRange::span).collect();
    if spans.is_empty() {
        return Vec::new();
    }

    spans.sort_by_key(|span| span.start);

    let mut merged: Vec<MinuteSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        if let Some(last) = merged.last_mut() {
            if span.start <= last.end {
                last.end = last.end.max(span.end);
                continue;
            }
        }
        merged.push(span);
    }

    merged
}

/// Normalize a day's ranges: [`merge_spans`] rendered back as [`TimeRange`]s.
pub fn normalize(ranges: &[TimeRange]) -> Vec<TimeRange> {
    merge_spans(ranges)
        .into_iter()
        .map(TimeRange::from_span)
        .collect()
}
