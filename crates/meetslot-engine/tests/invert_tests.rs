//! Tests for range inversion (whitelist ↔ blacklist conversion).

use meetslot_engine::invert::{gaps, invert};
use meetslot_engine::range::{merge_spans, MinuteSpan, TimeRange};
use meetslot_engine::ClockTime;

fn clock(s: &str) -> Option<ClockTime> {
    if s.is_empty() {
        None
    } else {
        Some(s.parse().unwrap())
    }
}

fn range(start: &str, end: &str) -> TimeRange {
    TimeRange::new(clock(start), clock(end))
}

#[test]
fn empty_inverts_to_all_day() {
    assert_eq!(invert(&[]), vec![range("", "")]);
}

#[test]
fn all_day_inverts_to_nothing() {
    assert!(invert(&[range("", "")]).is_empty());
}

#[test]
fn single_range_leaves_leading_and_trailing_gaps() {
    assert_eq!(
        invert(&[range("09:00", "12:00")]),
        vec![range("", "09:00"), range("12:00", "")]
    );
}

#[test]
fn open_start_leaves_only_trailing_gap() {
    assert_eq!(invert(&[range("", "12:00")]), vec![range("12:00", "")]);
}

#[test]
fn open_end_leaves_only_leading_gap() {
    assert_eq!(invert(&[range("15:00", "")]), vec![range("", "15:00")]);
}

#[test]
fn overlapping_input_is_merged_before_inverting() {
    assert_eq!(
        invert(&[
            range("14:00", "15:00"),
            range("09:00", "11:00"),
            range("10:30", "12:00"),
        ]),
        vec![range("", "09:00"), range("12:00", "14:00"), range("15:00", "")]
    );
}

#[test]
fn covered_until_end_of_day_has_no_trailing_gap() {
    assert_eq!(
        invert(&[range("", "10:00"), range("18:00", "")]),
        vec![range("10:00", "18:00")]
    );
}

#[test]
fn reversed_range_inverts_without_swapping_bounds() {
    // [600, 540) leaves the gap before its start and the tail after its end.
    assert_eq!(
        invert(&[range("10:00", "09:00")]),
        vec![range("", "10:00"), range("09:00", "")]
    );
}

#[test]
fn gaps_walk_with_cursor() {
    let merged = vec![MinuteSpan::new(60, 120), MinuteSpan::new(300, 1440)];
    assert_eq!(
        gaps(&merged),
        vec![MinuteSpan::new(0, 60), MinuteSpan::new(120, 300)]
    );
    assert_eq!(gaps(&[]), vec![MinuteSpan::new(0, 1440)]);
}

#[test]
fn double_inversion_preserves_covered_minutes() {
    let original = vec![
        range("", "08:30"),
        range("10:00", "11:15"),
        range("13:00", "13:45"),
        range("22:00", ""),
    ];
    let twice = invert(&invert(&original));
    assert_eq!(merge_spans(&twice), merge_spans(&original));
}

#[test]
fn inversion_is_deterministic() {
    let input = vec![range("07:00", "09:00"), range("17:00", "19:30")];
    assert_eq!(invert(&input), invert(&input));
}
