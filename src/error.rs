//! Error types for the billing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, its stores and its configuration can report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the billing engine.
///
/// All fallible operations in the crate return this error type, so callers
/// can match on the failure taxonomy without string inspection.
///
/// # Example
///
/// ```
/// use daycare_billing::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     from: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
///     to: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid billing range: 2026-03-31 is after 2026-03-01"
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

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested period starts after it ends.
    #[error("Invalid billing range: {from} is after {to}")]
    InvalidRange {
        /// The requested first day.
        from: NaiveDate,
        /// The requested last day.
        to: NaiveDate,
    },

    /// A year/month pair does not name a calendar month.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },

    /// A year falls outside the supported calendar.
    #[error("Invalid year: {year}")]
    InvalidYear {
        /// The requested year.
        year: i32,
    },

    /// A referenced entity does not exist in the entity store.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g. "child", "group").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// A collaborator store failed to produce its snapshot.
    #[error("Storage error in {store} store: {message}")]
    StorageError {
        /// The store that failed (e.g. "attendance").
        store: String,
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Builds a [`EngineError::NotFound`] for the given entity kind and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        EngineError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Builds a [`EngineError::StorageError`] for the given store.
    pub fn storage(store: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::StorageError {
            store: store.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
