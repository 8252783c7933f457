//! Error types for the mileage ledger.
//!
//! The aggregation engine itself is total over its inputs and never fails;
//! these errors cover loading and validating rate schedules and the HTTP
//! surface built on top of the core.

use thiserror::Error;

/// The main error type for the mileage ledger.
///
/// # Example
///
/// ```
/// use mileage_ledger::error::TrackerError;
///
/// let error = TrackerError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
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

    /// A year's rate schedule violates the cutoff rules.
    #[error("Invalid rate schedule for {year}: {message}")]
    InvalidSchedule {
        /// The year whose schedule is invalid.
        year: i32,
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// No rate schedule exists for the requested year.
    #[error("No mileage rate schedule for {year}")]
    ScheduleNotFound {
        /// The year that was requested.
        year: i32,
    },

    /// A month that is not a number in 1..=12 was supplied.
    #[error("Invalid month: {month}")]
    InvalidMonth {
        /// The month as it was given.
        month: String,
    },

    /// A year that is not a valid calendar year number was supplied.
    #[error("Invalid year: {year}")]
    InvalidYear {
        /// The year as it was given.
        year: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;
