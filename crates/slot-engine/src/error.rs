//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Malformed wall-clock time: {0}")]
    MalformedTime(String),

    #[error("Invalid day of week (expected 0-6, 0=Sunday): {0}")]
    InvalidDayOfWeek(u8),
}

pub type Result<T> = std::result::Result<T, SlotError>;
