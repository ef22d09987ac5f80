//! Error types for the shift scheduler.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every unexpected failure a shift operation can hit. Business-rule
//! rejections (a duplicate window) are not errors; see
//! [`WriteOutcome`](crate::usecase::WriteOutcome).

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the shift scheduler.
///
/// # Example
///
/// ```
/// use shift_scheduler::error::SchedulerError;
///
/// let error = SchedulerError::ShiftNotFound {
///     id: "missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift not found: missing");
/// ```
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// No shift exists with the requested id.
    #[error("Shift not found: {id}")]
    ShiftNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A date value could not be parsed.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time-of-day value could not be parsed.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The raw value that failed to parse.
        value: String,
        /// A description of the parse error.
        message: String,
    },

    /// The store refused a write because another shift holds the window.
    #[error("Shift window {start}-{end} on {date} is already taken by shift '{existing_id}'")]
    WindowConflict {
        /// The date of the conflicting window.
        date: NaiveDate,
        /// The start of the requested window (`HH:MM`).
        start: String,
        /// The end of the requested window (`HH:MM`).
        end: String,
        /// The id of the shift already holding the window.
        existing_id: String,
    },

    /// The persistence layer failed.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds unusable values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return SchedulerError.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
