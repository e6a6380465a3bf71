//! Error handling for username-forge

use thiserror::Error;

/// Main error type for username-forge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl UsernameForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!(
                    "❌ Configuration problem: {}\n💡 Check your options and try again",
                    message
                )
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Internal { message } => {
                format!(
                    "❌ Internal error: {}\n💡 This is a bug, please report it",
                    message
                )
            }
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, UsernameForgeError>;
