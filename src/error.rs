//! Unified error hierarchy for calrs
//!
//! The assessment engine itself is total and never errors; everything here
//! covers the surfaces around it: input validation, configuration, and IO.

use thiserror::Error;

/// Top-level error type for all calrs operations
#[derive(Debug, Error)]
pub enum CalrsError {
    /// Input range validation errors (caller-side gate for the engine)
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calrs operations
pub type Result<T> = std::result::Result<T, CalrsError>;

impl CalrsError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalrsError::Validation { .. } => ErrorSeverity::Warning,
            CalrsError::Configuration(_) => ErrorSeverity::Error,
            CalrsError::Io(_) => ErrorSeverity::Error,
            CalrsError::Serialization(_) => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CalrsError::Validation { field, reason } => {
                format!("Please check your {} input: {}", field, reason)
            }
            CalrsError::Configuration(_) => {
                "Unable to load configuration. Please check your config file.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
