//! Error types for expectation suites.

use thiserror::Error;

/// Result type for suite operations.
pub type Result<T> = std::result::Result<T, SuiteError>;

/// Errors raised while working with suite definitions.
#[derive(Error, Debug)]
pub enum SuiteError {
    /// Suite definition is not usable
    #[error("Invalid suite '{suite}': {message}")]
    InvalidDefinition {
        /// Suite name
        suite: String,
        /// What is wrong with it
        message: String,
    },

    /// A named suite could not be found
    #[error("Expectation suite not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl SuiteError {
    /// Creates a new invalid-definition error.
    pub fn invalid(suite: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            suite: suite.into(),
            message: message.into(),
        }
    }
}
