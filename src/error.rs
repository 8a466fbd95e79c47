//! Error types for the salary accrual crate.
//!
//! The accrual engine itself never fails: degenerate schedules simply produce
//! zero earnings. These errors cover the surfaces around it, such as loading
//! schedule files and reading or writing the settings store.

use thiserror::Error;

/// The main error type for the salary accrual crate.
///
/// # Example
///
/// ```
/// use salary_accrual::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
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

    /// The settings store could not be read or written.
    #[error("Settings store I/O failed for '{path}': {message}")]
    SettingsIo {
        /// The backing file of the store.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The settings store contents were not a valid key-value document.
    #[error("Settings store '{path}' is corrupt: {message}")]
    SettingsParse {
        /// The backing file of the store.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A user-supplied value could not be interpreted.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
