//! Error types for the Benefit Simulation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while simulating a claim.
//! Ineligibility is not an error: it is a normal simulation outcome.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A single problem found while validating a submitted claimant profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The name of the offending field.
    pub field: String,
    /// What is wrong with the field.
    pub message: String,
}

impl FieldViolation {
    /// Creates a violation for the given field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn describe_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("'{}' {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// The main error type for the Benefit Simulation Engine.
///
/// # Example
///
/// ```
/// use benefit_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/allowance.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/allowance.yaml");
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

    /// The submitted profile is missing mandatory fields or holds malformed values.
    ///
    /// Every violation found in the submission is reported at once.
    #[error("Invalid claimant profile: {}", describe_violations(.violations))]
    InvalidProfile {
        /// All violations found in the submission.
        violations: Vec<FieldViolation>,
    },

    /// No simulation with the given identifier exists in the history.
    #[error("Simulation not found: {id}")]
    SimulationNotFound {
        /// The identifier that was looked up.
        id: Uuid,
    },

    /// The history store could not be read or written.
    #[error("History store error for namespace '{namespace}': {message}")]
    Persistence {
        /// The store namespace involved.
        namespace: String,
        /// A description of the failure.
        message: String,
    },

    /// A result could not be exported or imported.
    #[error("Serialization error: {message}")]
    Serialization {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
