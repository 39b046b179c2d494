use thiserror::Error;

/// Errors raised by the calendar and slot arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Date out of range: {year}-{month}-{day}")]
    DateOutOfRange { year: i32, month: i32, day: i64 },

    #[error("Invalid slot time {hour}:{minute:02}")]
    InvalidSlot { hour: u32, minute: u32 },

    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),
}
