//! Core error types for clockface-core.
//!
//! This module defines the error hierarchy using thiserror. The layout
//! engine itself has no runtime failure modes; validation errors exist to
//! fail fast on malformed caller input rather than produce a silently
//! wrong layout.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for clockface-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors for event fields.
///
/// A failed validation is a programmer error in the caller; it aborts the
/// single layout call and leaves any previously computed plan untouched.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Hour outside the time-of-day range
    #[error("Hour {hour} out of range for event '{event_id}' (expected 0-23)")]
    HourOutOfRange { event_id: String, hour: u32 },

    /// Minute outside [0, 59]
    #[error("Minute {minute} out of range for event '{event_id}' (expected 0-59)")]
    MinuteOutOfRange { event_id: String, minute: u32 },

    /// Second outside [0, 59]
    #[error("Second {second} out of range (expected 0-59)")]
    SecondOutOfRange { second: u32 },

    /// Negative duration
    #[error("Negative duration {minutes} for event '{event_id}'")]
    NegativeDuration { event_id: String, minutes: i64 },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
