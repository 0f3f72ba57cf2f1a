//! Aggregation parameters.

use serde::{Deserialize, Serialize};

use crate::clock::MINUTES_PER_DAY;
use crate::error::{Result, SlotError};

/// Default slot width in minutes.
pub const DEFAULT_SLOT_MINUTES: u32 = 15;

/// Default admission threshold: a slot is kept when at least this fraction of
/// participants can attend.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Validated aggregation parameters.
///
/// `slot_minutes` divides the day evenly and `threshold` lies in `[0, 1]`.
/// Deserialized values go through the same checks as [`AggregationConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", rename_all = "camelCase")]
pub struct AggregationConfig {
    slot_minutes: u32,
    threshold: f64,
}

impl AggregationConfig {
    /// # Errors
    /// Returns `SlotError::InvalidConfig` when `slot_minutes` is zero or does not
    /// divide 1440, or when `threshold` is not a finite value in `[0, 1]`.
    pub fn new(slot_minutes: u32, threshold: f64) -> Result<Self> {
        if slot_minutes == 0 || MINUTES_PER_DAY % slot_minutes != 0 {
            return Err(SlotError::InvalidConfig(format!(
                "slot width {slot_minutes} must be a positive divisor of {MINUTES_PER_DAY}"
            )));
        }
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(SlotError::InvalidConfig(format!(
                "threshold {threshold} must be within [0, 1]"
            )));
        }
        Ok(Self {
            slot_minutes,
            threshold,
        })
    }

    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Replace the slot width, re-validating.
    pub fn with_slot_minutes(self, slot_minutes: u32) -> Result<Self> {
        Self::new(slot_minutes, self.threshold)
    }

    /// Replace the threshold, re-validating.
    pub fn with_threshold(self, threshold: f64) -> Result<Self> {
        Self::new(self.slot_minutes, threshold)
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            slot_minutes: DEFAULT_SLOT_MINUTES,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default = "default_slot_minutes")]
    slot_minutes: u32,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

fn default_slot_minutes() -> u32 {
    DEFAULT_SLOT_MINUTES
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl TryFrom<RawConfig> for AggregationConfig {
    type Error = SlotError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Self::new(raw.slot_minutes, raw.threshold)
    }
}
