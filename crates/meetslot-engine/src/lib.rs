//! # meetslot-engine
//!
//! Availability aggregation and interval arithmetic for finding a meeting time
//! across a group.
//!
//! Each participant states availability for a set of candidate dates either as
//! times they can attend (whitelist) or times they cannot (blacklist). The
//! engine scores every fixed-width slot of every date by the fraction of
//! participants available, merges contiguous equal slots, and ranks the result.
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` values and minute-offset conversion
//! - [`range`] — Time ranges, minute spans, and range merging
//! - [`invert`] — Complement of a day's ranges (whitelist ↔ blacklist)
//! - [`evaluate`] — Per-participant, per-slot availability
//! - [`aggregate`] — Ranked per-slot aggregation over an event
//! - [`model`] — Event, participant, and availability types
//! - [`edit`] — Pure editing operations (save, delete, mode switch, bulk apply)
//! - [`config`] — Slot width and admission threshold
//! - [`sample`] — A ready-made demo event
//! - [`error`] — Error types

pub mod aggregate;
pub mod clock;
pub mod config;
pub mod edit;
pub mod error;
pub mod evaluate;
pub mod invert;
pub mod model;
pub mod range;
pub mod sample;

pub use aggregate::{aggregate, aggregate_with, AggregatedSlot, ScoreTier, SlotView};
pub use clock::{ClockTime, Edge, MINUTES_PER_DAY};
pub use config::AggregationConfig;
pub use edit::DateMemo;
pub use error::SlotError;
pub use evaluate::is_available;
pub use invert::invert;
pub use model::{parse_date, Availability, Event, Mode, Participant, Period};
pub use range::{merge_spans, normalize, MinuteSpan, TimeRange};
