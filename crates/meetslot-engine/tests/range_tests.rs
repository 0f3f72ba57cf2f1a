//! Tests for range resolution, overlap, and merging.

use meetslot_engine::range::{merge_spans, normalize, MinuteSpan, TimeRange};
use meetslot_engine::ClockTime;

// ── Helpers ─────────────────────────────────────────────────────────────────

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

// ── Resolution ──────────────────────────────────────────────────────────────

#[test]
fn open_bounds_resolve_to_whole_day() {
    assert_eq!(range("", "").span(), MinuteSpan::new(0, 1440));
    assert_eq!(range("", "12:00").span(), MinuteSpan::new(0, 720));
    assert_eq!(range("15:00", "").span(), MinuteSpan::new(900, 1440));
}

#[test]
fn from_span_opens_day_edges_only() {
    assert_eq!(TimeRange::from_span(MinuteSpan::new(0, 1440)), TimeRange::all_day());
    assert_eq!(TimeRange::from_span(MinuteSpan::new(0, 600)), range("", "10:00"));
    assert_eq!(TimeRange::from_span(MinuteSpan::new(600, 1440)), range("10:00", ""));
    // An end of 00:00 stays explicit; it is not the open end of the day.
    assert_eq!(TimeRange::from_span(MinuteSpan::new(600, 0)), range("10:00", "00:00"));
}

#[test]
fn labels_describe_open_bounds() {
    assert_eq!(range("", "").label(), "all day (00:00 - 24:00)");
    assert_eq!(range("", "12:00").label(), "until 12:00");
    assert_eq!(range("15:00", "").label(), "from 15:00");
    assert_eq!(range("09:00", "10:30").label(), "09:00 - 10:30");
}

// ── Overlap ─────────────────────────────────────────────────────────────────

#[test]
fn overlap_is_strict() {
    let slot = MinuteSpan::new(600, 615);
    assert!(MinuteSpan::new(590, 601).overlaps(&slot));
    assert!(MinuteSpan::new(614, 700).overlaps(&slot));
    // Touching at either edge is not an overlap.
    assert!(!MinuteSpan::new(540, 600).overlaps(&slot));
    assert!(!MinuteSpan::new(615, 700).overlaps(&slot));
}

#[test]
fn inverted_span_overlaps_nothing() {
    let inverted = range("14:00", "10:00").span();
    for start in (0..1440).step_by(15) {
        assert!(!inverted.overlaps(&MinuteSpan::new(start, start + 15)));
    }
}

// ── Merging ─────────────────────────────────────────────────────────────────

#[test]
fn merges_overlapping_and_keeps_disjoint() {
    let merged = normalize(&[
        range("09:00", "11:00"),
        range("10:30", "12:00"),
        range("14:00", "15:00"),
    ]);
    assert_eq!(merged, vec![range("09:00", "12:00"), range("14:00", "15:00")]);
}

#[test]
fn merges_touching_ranges() {
    let merged = merge_spans(&[range("10:00", "11:00"), range("11:00", "12:00")]);
    assert_eq!(merged, vec![MinuteSpan::new(600, 720)]);
}

#[test]
fn sorts_unordered_input() {
    let merged = merge_spans(&[
        range("16:00", "17:00"),
        range("08:00", "09:00"),
        range("12:00", "13:00"),
    ]);
    assert_eq!(
        merged,
        vec![
            MinuteSpan::new(480, 540),
            MinuteSpan::new(720, 780),
            MinuteSpan::new(960, 1020),
        ]
    );
}

#[test]
fn contained_range_does_not_shrink_running_span() {
    let merged = merge_spans(&[range("08:00", "18:00"), range("09:00", "10:00")]);
    assert_eq!(merged, vec![MinuteSpan::new(480, 1080)]);
}

#[test]
fn open_ranges_merge_to_whole_day() {
    let merged = merge_spans(&[range("", "12:00"), range("11:00", "")]);
    assert_eq!(merged, vec![MinuteSpan::new(0, 1440)]);
}

#[test]
fn reversed_range_is_merged_as_entered() {
    assert_eq!(
        merge_spans(&[range("08:00", "09:10"), range("10:00", "09:00")]),
        vec![MinuteSpan::new(480, 550), MinuteSpan::new(600, 540)]
    );
    // Folded into an earlier span, it never pulls that span's end back.
    assert_eq!(
        merge_spans(&[range("10:00", "09:00"), range("09:30", "11:00")]),
        vec![MinuteSpan::new(570, 660)]
    );
}

#[test]
fn empty_input_merges_to_nothing() {
    assert!(merge_spans(&[]).is_empty());
    assert!(normalize(&[]).is_empty());
}

#[test]
fn deserializes_blank_null_and_missing_bounds_as_open() {
    let ranges: Vec<TimeRange> = serde_json::from_str(
        r#"[{"start":"","end":""},{"start":null,"end":"12:00"},{"end":"13:00"},{}]"#,
    )
    .unwrap();
    assert_eq!(
        ranges,
        vec![
            range("", ""),
            range("", "12:00"),
            range("", "13:00"),
            range("", ""),
        ]
    );
}

#[test]
fn serializes_open_bounds_as_empty_strings() {
    let json = serde_json::to_string(&range("", "09:15")).unwrap();
    assert_eq!(json, r#"{"start":"","end":"09:15"}"#);
}

#[test]
fn rejects_malformed_bounds_when_deserializing() {
    assert!(serde_json::from_str::<TimeRange>(r#"{"start":"25:00","end":""}"#).is_err());
}
