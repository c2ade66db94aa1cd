// Error types module

use std::fmt;

use thiserror::Error;

/// A single rejected transform option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Option name as the caller spells it (e.g. `width`)
    pub field: &'static str,
    /// Human readable reason
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Centralized error type for URL resolution
///
/// Every variant is local and synchronous: nothing was fetched, so nothing
/// is worth retrying. Callers decide whether to surface or degrade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// A resolution was attempted before the configuration store was initialized
    #[error("Media configuration has not been initialized")]
    NotConfigured,

    /// Configuration failed schema checks, or was initialized twice
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Path was rejected by the sanitizer
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// One or more transform options were out of range or unrecognized
    #[error("Invalid transform options: {}", join_violations(.violations))]
    InvalidOptions { violations: Vec<FieldViolation> },
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl MediaError {
    /// Stable machine-readable tag for this error
    pub fn kind(&self) -> &'static str {
        match self {
            MediaError::NotConfigured => "not_configured",
            MediaError::InvalidConfiguration(_) => "invalid_configuration",
            MediaError::InvalidPath { .. } => "invalid_path",
            MediaError::InvalidOptions { .. } => "invalid_options",
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        MediaError::InvalidConfiguration(message.into())
    }

    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        MediaError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
