//! Error types for the Payslip Simulation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate tables or
//! running a simulation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Payslip Simulation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A tax bracket table failed validation on load.
    #[error("Invalid bracket table in '{path}': {message}")]
    InvalidBracketTable {
        /// The path to the rate file containing the bad table.
        path: String,
        /// A description of what made the table invalid.
        message: String,
    },

    /// A contribution rate entry failed validation on load.
    #[error("Invalid contribution rate '{code}': {message}")]
    InvalidContributionRate {
        /// The code of the contribution entry.
        code: String,
        /// A description of what made the rate invalid.
        message: String,
    },

    /// No rate configuration is effective for the given date.
    #[error("No rate configuration effective on date {date}")]
    RatesNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// The gross salary input was invalid.
    #[error("Invalid gross salary: {message}")]
    InvalidSalary {
        /// A description of what made the salary invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
