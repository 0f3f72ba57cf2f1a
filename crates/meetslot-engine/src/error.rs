//! Error types for meetslot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid clock value: {0}")]
    InvalidClock(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid aggregation config: {0}")]
    InvalidConfig(String),

    #[error("At least one candidate date is required")]
    NoCandidateDates,

    #[error("Participant name must not be blank")]
    EmptyName,

    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
