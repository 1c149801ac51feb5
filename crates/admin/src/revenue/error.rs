use chrono::NaiveDateTime;
use shared::errors::ServiceError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RevenueError {
    #[error("start_date {start} is after end_date {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("{field} '{value}' is not a valid date or timestamp")]
    InvalidDate { field: &'static str, value: String },

    #[error("{field} must be a positive identifier, got {value}")]
    InvalidIdentifier { field: &'static str, value: i32 },

    #[error("{0} is required")]
    Missing(&'static str),

    #[error("period window starting at {0} exceeds the supported date range")]
    OutOfRange(NaiveDateTime),

    #[error("revenue of sale {0} overflows the supported amount range")]
    Overflow(i32),
}

impl From<RevenueError> for ServiceError {
    fn from(err: RevenueError) -> Self {
        match err {
            RevenueError::InvalidRange { .. } => ServiceError::InvalidRange(err.to_string()),
            RevenueError::Overflow(_) => ServiceError::Internal(err.to_string()),
            _ => ServiceError::Validation(vec![err.to_string()]),
        }
    }
}
