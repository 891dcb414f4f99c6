//! Error types for the Tastevin engine
//!
//! This module provides structured error handling using thiserror for
//! error definitions and anyhow for propagation in the CLI binary.
//!
//! Malformed input (unknown cluster ids, answers referencing pairs that were
//! never supplied) fails fast: silently defaulting would corrupt a profile
//! invisibly. Under-supply of candidate pairs is deliberately *not* an error;
//! the selector degrades through its fallback tiers instead.

use thiserror::Error;

/// Main error type for Tastevin operations
#[derive(Error, Debug)]
pub enum TasteError {
    /// Cluster id not present in the cluster catalogue
    #[error("Unknown cluster: {0}")]
    UnknownCluster(String),

    /// Answer references a pair id not present in the supplied pair list
    #[error("Unknown quiz pair: {0}")]
    UnknownPair(String),

    /// Stored vector array has a length no schema version ever used
    #[error("Unknown vector schema width: {0}")]
    UnknownSchemaWidth(usize),

    /// Quiz session misuse (answer outside the current phase, advancing a
    /// completed session)
    #[error("Quiz phase violation: {0}")]
    PhaseViolation(String),

    /// Profile lookup that requires an existing profile
    #[error("Profile not found: {0}")]
    ProfileNotFound(uuid::Uuid),

    /// Invalid profile identifier
    #[error("Invalid profile ID: {0}")]
    InvalidProfileId(#[from] uuid::Error),

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Tastevin operations
pub type Result<T> = std::result::Result<T, TasteError>;

/// Convert anyhow::Error to TasteError
impl From<anyhow::Error> for TasteError {
    fn from(err: anyhow::Error) -> Self {
        TasteError::Other(err.to_string())
    }
}
