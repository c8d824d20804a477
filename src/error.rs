//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing and
//! report aggregation.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::NotFound {
///     entity: "pay period".to_string(),
///     id: 42,
/// };
/// assert_eq!(error.to_string(), "pay period not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request was malformed before any data access happened.
    #[error("Validation failed: {message}")]
    Validation {
        /// A description of what was missing or malformed.
        message: String,
    },

    /// No identity was presented, or it could not be understood.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// A description of why the identity was rejected.
        message: String,
    },

    /// The identity is known but lacks the capability for this operation.
    #[error("Forbidden: role '{role}' may not perform {operation}")]
    Forbidden {
        /// The role that was presented.
        role: String,
        /// The operation that was attempted.
        operation: String,
    },

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity that was looked up.
        entity: String,
        /// The id that was not found.
        id: i64,
    },

    /// The operation conflicts with the current lifecycle state.
    #[error("Conflict: {message}")]
    Conflict {
        /// A description of the conflicting state.
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

    /// A data-access call failed or timed out.
    #[error("Unexpected error: {message}")]
    Unexpected {
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Convenience constructor for validation errors.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Convenience constructor for conflict errors.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Convenience constructor for unexpected data-access failures.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
