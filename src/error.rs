//! Error types for the Orienta recommendation engine
//!
//! This module provides error handling using thiserror for structured
//! error definitions and anyhow for error propagation at the edges.
//!
//! The scoring core itself is total: aggregation, completeness estimation
//! and weight redistribution are defined for every valid-shaped input and
//! return plain values. Errors only arise at the persistence and
//! deserialization boundary.

use thiserror::Error;

/// Main error type for Orienta operations
#[derive(Error, Debug)]
pub enum OrientaError {
    /// I/O error while reading or writing the weight store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted weight document failed to parse
    #[error("Failed to parse stored weights: {0}")]
    ParseWeights(#[from] toml::de::Error),

    /// Weight document failed to serialize
    #[error("Failed to serialize weights: {0}")]
    SerializeWeights(#[from] toml::ser::Error),

    /// Signal snapshot document failed to parse
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Weight configuration violates its bounds or the sum invariant
    #[error("Invalid weight configuration: {0}")]
    InvalidWeights(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Orienta operations
pub type Result<T> = std::result::Result<T, OrientaError>;

/// Convert anyhow::Error to OrientaError
impl From<anyhow::Error> for OrientaError {
    fn from(err: anyhow::Error) -> Self {
        OrientaError::Other(err.to_string())
    }
}
