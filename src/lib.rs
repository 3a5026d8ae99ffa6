//! love-inquiry - an interactive valentine greeting for the terminal
//!
//! A welcome screen, a short trivia quiz, a yes/no question whose "no"
//! button keeps shrinking, and a celebratory success screen, all drawn
//! over a layer of rising hearts.

use std::fmt;

pub mod app;
pub mod config;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum InquiryError {
    /// Terminal or file I/O failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for InquiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InquiryError::IoError(err) => write!(f, "I/O error: {}", err),
            InquiryError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            InquiryError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for InquiryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InquiryError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InquiryError {
    fn from(err: std::io::Error) -> Self {
        InquiryError::IoError(err)
    }
}

impl From<toml::de::Error> for InquiryError {
    fn from(err: toml::de::Error) -> Self {
        InquiryError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for love-inquiry operations
pub type Result<T> = std::result::Result<T, InquiryError>;

/// Error reporting helpers
pub mod error {
    use super::InquiryError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &InquiryError) -> String {
        match error {
            InquiryError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your greeting file.", msg)
            }
            InquiryError::TuiError(_) => {
                "The terminal could not be set up. Try running in an interactive terminal."
                    .to_string()
            }
            InquiryError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied while reading the greeting file.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "love-inquiry";
pub const CONFIG_FILE: &str = "love-inquiry.toml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_source() {
        let err: InquiryError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, InquiryError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_user_friendly_config_message() {
        let msg = error::user_friendly_message(&InquiryError::ConfigError("no questions".into()));
        assert!(msg.contains("no questions"));
        assert!(msg.contains("greeting file"));
    }
}
