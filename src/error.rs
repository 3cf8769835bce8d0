//! Error types for the shift roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and its adapters can report.

use thiserror::Error;

use crate::models::Day;

/// The main error type for the shift roster engine.
///
/// Import format errors carry the 1-based row and column of the first
/// violation found. Coverage shortfalls are not errors; they are recorded on
/// the [`ScheduleReport`](crate::models::ScheduleReport).
///
/// # Example
///
/// ```
/// use shift_roster::error::EngineError;
///
/// let error = EngineError::ColumnCount {
///     row: 3,
///     expected: 8,
///     found: 7,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid number of columns in row 3: expected 8, found 7"
/// );
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

    /// A configuration value is out of range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The roster input file does not exist.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The roster input file has no header row.
    #[error("Input file '{path}' is empty")]
    EmptyInput {
        /// The path of the empty file.
        path: String,
    },

    /// A row (header is row 1) has the wrong number of fields.
    #[error("Invalid number of columns in row {row}: expected {expected}, found {found}")]
    ColumnCount {
        /// The 1-based row number.
        row: usize,
        /// The required column count.
        expected: usize,
        /// The column count actually present.
        found: usize,
    },

    /// A header cell does not match the fixed layout.
    #[error("Invalid header in column {column}: expected '{expected}', found '{found}'")]
    InvalidHeader {
        /// The 1-based column number.
        column: usize,
        /// The required header text.
        expected: String,
        /// The header text actually present.
        found: String,
    },

    /// A data row has a blank employee name.
    #[error("Empty employee name in row {row}")]
    EmptyName {
        /// The 1-based row number.
        row: usize,
    },

    /// A shift field is not one of M, A, E or N.
    #[error(
        "Invalid shift code in row {row}, column {column}: found '{code}', \
         expected M (Morning), A (Afternoon), E (Evening) or N (No Shift)"
    )]
    InvalidShiftCode {
        /// The 1-based row number.
        row: usize,
        /// The 1-based column number.
        column: usize,
        /// The code as written in the file.
        code: String,
    },

    /// The CSV reader or writer failed below the format level.
    #[error("CSV error: {message}")]
    CsvRead {
        /// The underlying csv error message.
        message: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An assignment violated the one-shift-per-day or weekly cap rules.
    #[error("Cannot assign '{employee}' on {day}: {reason}")]
    AssignmentRejected {
        /// The employee name.
        employee: String,
        /// The day of the rejected assignment.
        day: Day,
        /// Which precondition failed.
        reason: String,
    },

    /// `generate_schedule` was called on an engine that already ran.
    #[error("Schedule has already been generated for this roster")]
    ScheduleAlreadyGenerated,

    /// An employee record supplied by an adapter was invalid.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        let message = error.to_string();
        match error.into_kind() {
            csv::ErrorKind::Io(io) => EngineError::Io(io),
            _ => EngineError::CsvRead { message },
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
