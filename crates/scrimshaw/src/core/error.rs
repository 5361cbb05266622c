//! Core error types for UML diagram generation
//!
//! This module defines the common error type used throughout the model
//! building and rendering pipeline.

use thiserror::Error;

/// Errors raised while building the UML model or rendering a diagram.
#[derive(Error, Debug)]
pub enum UmlError {
    #[error("Invalid model: {message}")]
    InvalidModel { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Backend error: {message}")]
    Backend { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl UmlError {
    /// Create a new invalid-model error.
    pub fn invalid_model(message: impl Into<String>) -> Self {
        Self::InvalidModel {
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new render error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a new backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_model_error() {
        let error = UmlError::invalid_model("Member name is empty");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Invalid model"));
        assert!(error_msg.contains("Member name is empty"));
    }

    #[test]
    fn test_config_error() {
        let error = UmlError::config("Unsupported encoding: latin-1");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Configuration error"));
        assert!(error_msg.contains("latin-1"));
    }

    #[test]
    fn test_backend_error() {
        let error = UmlError::backend("server returned status 500");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Backend error"));
        assert!(error_msg.contains("500"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: UmlError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
