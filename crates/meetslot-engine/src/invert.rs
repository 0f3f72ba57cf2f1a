//! Complement of a day's ranges, used when a participant switches between
//! whitelist and blacklist input.
//!
//! Merges the ranges, then walks them with a cursor from 00:00 and emits every
//! gap up to 24:00. The result describes the same permitted/forbidden minutes
//! under the opposite mode.

use crate::clock::MINUTES_PER_DAY;
use crate::range::{merge_spans, MinuteSpan, TimeRange};

/// Invert a day's ranges within `[00:00, 24:00)`.
///
/// Nothing entered inverts to a single all-day range. A range set that already
/// covers the whole day inverts to an empty list. Start 00:00 and end 24:00
/// are rendered as open bounds.
pub fn invert(ranges: &[TimeRange]) -> Vec<TimeRange> {
    if ranges.is_empty() {
        return vec![TimeRange::all_day()];
    }

    gaps(&merge_spans(ranges))
        .into_iter()
        .map(TimeRange::from_span)
        .collect()
}

/// The uncovered parts of `[0, 1440)` given merged, sorted spans.
pub fn gaps(merged: &[MinuteSpan]) -> Vec<MinuteSpan> {
    let mut gaps = Vec::new();
    let mut cursor = 0;

    for span in merged {
        if span.start > cursor {
            gaps.push(MinuteSpan::new(cursor, span.start));
        }
        cursor = cursor.max(span.end);
    }

    // Trailing gap after the last covered span.
    if cursor < MINUTES_PER_DAY {
        gaps.push(MinuteSpan::new(cursor, MINUTES_PER_DAY));
    }

    gaps
}
