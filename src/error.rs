//! Error handling module for droidsweep
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the library should use these types for consistency.

#![allow(dead_code)] // Error variants and helpers are available for library consumers

use thiserror::Error;

/// Main error type for droidsweep
#[derive(Error, Debug)]
pub enum DroidSweepError {
    /// IO errors (database file reads, stdin)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reference database errors (loading, malformed records)
    #[error("Database error: {0}")]
    Database(String),

    /// Raw input was empty or whitespace-only before normalization
    #[error("No input provided - paste a package list before detecting")]
    BlankInput,

    /// Normalization produced zero package identifiers
    #[error("No valid packages found in input - expected one package identifier per line")]
    EmptyInput,

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for droidsweep operations
pub type Result<T> = std::result::Result<T, DroidSweepError>;

// Convenient error constructors
impl DroidSweepError {
    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }

    /// True for the two recoverable user-input errors: the caller should
    /// keep its previous session and let the user correct the paste.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::BlankInput | Self::EmptyInput)
    }
}
