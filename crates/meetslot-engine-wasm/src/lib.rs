//! WASM bindings for meetslot-engine.
//!
//! Exposes range inversion, slot aggregation, mode switching, and per-date memos
//! to a browser host via `wasm-bindgen`. All complex types cross the boundary as
//! JSON strings in the same camelCase shape the host stores events in.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meetslot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/meetslot-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meetslot_engine_wasm.wasm
//! ```

use meetslot_engine::{parse_date, AggregationConfig, Event, Mode, SlotView, TimeRange};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON-in/JSON-out implementations (plain Rust, testable off-wasm)
// ---------------------------------------------------------------------------

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn parse_event(json: &str) -> Result<Event, String> {
    Event::from_json(json).map_err(|e| e.to_string())
}

fn parse_mode(mode: &str) -> Result<Mode, String> {
    match mode {
        "whitelist" => Ok(Mode::Whitelist),
        "blacklist" => Ok(Mode::Blacklist),
        other => Err(format!(
            "Unknown mode '{}'. Expected 'whitelist' or 'blacklist'",
            other
        )),
    }
}

fn invert_ranges_json(ranges_json: &str) -> Result<String, String> {
    let ranges: Vec<TimeRange> = serde_json::from_str(ranges_json)
        .map_err(|e| format!("Invalid ranges JSON: {}", e))?;
    to_json(&meetslot_engine::invert(&ranges))
}

fn aggregate_json(event_json: &str, config: &AggregationConfig) -> Result<String, String> {
    let event = parse_event(event_json)?;
    let slots = meetslot_engine::aggregate_with(&event, config);
    let views: Vec<SlotView> = slots.iter().map(SlotView::from).collect();
    to_json(&views)
}

fn switch_mode_json(
    event_json: &str,
    participant_id: &str,
    mode: &str,
    convert: bool,
) -> Result<String, String> {
    let event = parse_event(event_json)?;
    let mode = parse_mode(mode)?;
    let updated = event
        .with_mode_switched(participant_id, mode, convert)
        .map_err(|e| e.to_string())?;
    to_json(&updated)
}

fn memos_for_json(event_json: &str, date: &str) -> Result<String, String> {
    let event = parse_event(event_json)?;
    let date = parse_date(date).map_err(|e| e.to_string())?;
    to_json(&event.memos_for(date))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Invert a day's ranges: the uncovered parts of 00:00-24:00.
///
/// `ranges_json` is a JSON array of `{start, end}` objects with `"HH:MM"` or
/// `""` bounds. An empty array inverts to a single all-day range.
#[wasm_bindgen(js_name = "invertRanges")]
pub fn invert_ranges(ranges_json: &str) -> Result<String, JsValue> {
    invert_ranges_json(ranges_json).map_err(|e| JsValue::from_str(&e))
}

/// Rank the event's slots with the default 15-minute width and 0.5 threshold.
///
/// Returns a JSON array of slots with `dateStr`, `startMin`, `endMin`, `start`,
/// `end`, `score`, `availableCount`, `attendees`, `absentees` and `tier`.
#[wasm_bindgen]
pub fn aggregate(event_json: &str) -> Result<String, JsValue> {
    aggregate_json(event_json, &AggregationConfig::default()).map_err(|e| JsValue::from_str(&e))
}

/// Rank the event's slots with an explicit slot width and threshold.
#[wasm_bindgen(js_name = "aggregateWith")]
pub fn aggregate_with(event_json: &str, slot_minutes: u32, threshold: f64) -> Result<String, JsValue> {
    let config = AggregationConfig::new(slot_minutes, threshold)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    aggregate_json(event_json, &config).map_err(|e| JsValue::from_str(&e))
}

/// Switch a participant's mode and return the updated event JSON.
///
/// With `convert` set, the participant's ranges on every target date are
/// replaced by their inversion so actual availability is unchanged.
#[wasm_bindgen(js_name = "switchMode")]
pub fn switch_mode(
    event_json: &str,
    participant_id: &str,
    mode: &str,
    convert: bool,
) -> Result<String, JsValue> {
    switch_mode_json(event_json, participant_id, mode, convert).map_err(|e| JsValue::from_str(&e))
}

/// Non-blank memos left for `date` (`YYYY-MM-DD`), as `[{name, memo}]`.
#[wasm_bindgen(js_name = "memosFor")]
pub fn memos_for(event_json: &str, date: &str) -> Result<String, JsValue> {
    memos_for_json(event_json, date).map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use meetslot_engine::sample::sample_event;

    fn sample_json() -> String {
        let base = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        serde_json::to_string(&sample_event(base)).unwrap()
    }

    #[test]
    fn invert_round_trips_through_json() {
        let out = invert_ranges_json(r#"[{"start":"09:00","end":"12:00"}]"#).unwrap();
        assert_eq!(out, r#"[{"start":"","end":"09:00"},{"start":"12:00","end":""}]"#);
    }

    #[test]
    fn aggregate_adds_display_fields() {
        let out = aggregate_json(&sample_json(), &AggregationConfig::default()).unwrap();
        let slots: serde_json::Value = serde_json::from_str(&out).unwrap();
        let first = &slots[0];
        assert_eq!(first["dateStr"], "2026-06-02");
        assert_eq!(first["start"], "15:00");
        assert_eq!(first["end"], "18:00");
        assert_eq!(first["tier"], "all");
    }

    #[test]
    fn switch_mode_rejects_unknown_mode() {
        let err = switch_mode_json(&sample_json(), "p1", "maybe", true).unwrap_err();
        assert!(err.contains("Unknown mode"));
    }

    #[test]
    fn memos_for_rejects_bad_date() {
        let err = memos_for_json(&sample_json(), "06/02/2026").unwrap_err();
        assert!(err.starts_with("Invalid date"), "got {err}");
        let out = memos_for_json(&sample_json(), "2026-06-08").unwrap();
        assert_eq!(out, r#"[{"name":"Sato","memo":"Any time"}]"#);
    }
}
