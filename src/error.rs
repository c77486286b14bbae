//! Error types for cmdtree operations.
//!
//! This module defines [`CmdTreeError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Dispatch failures (propagation, handler errors) abort the whole chain and
//!   surface to the invocation source unchanged
//! - Config values are validated before any settings record is produced
//! - Use `anyhow::Error` (via `CmdTreeError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::command::StateKind;

/// Core error type for cmdtree operations.
#[derive(Debug, Error)]
pub enum CmdTreeError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A configuration value failed validation.
    #[error("Invalid value for '{key}': {message}")]
    ConfigValidationError { key: String, message: String },

    /// The child declares the propagated field under a different kind.
    #[error("Cannot propagate '{field}' from '{parent}' to '{child}': expected {expected}, found {found}")]
    PropagationTypeMismatch {
        field: String,
        parent: String,
        child: String,
        expected: StateKind,
        found: StateKind,
    },

    /// The child field refuses writes.
    #[error("Cannot propagate '{field}' from '{parent}' to '{child}': field is sealed")]
    PropagationDenied {
        field: String,
        parent: String,
        child: String,
    },

    /// A handler touched a field its node never declared.
    #[error("No field named '{field}' is declared")]
    UnknownField { field: String },

    /// A handler wrote a value of the wrong kind into its own field.
    #[error("Field '{field}' holds {expected}, cannot store {found}")]
    FieldTypeMismatch {
        field: String,
        expected: StateKind,
        found: StateKind,
    },

    /// A command handler failed while executing.
    #[error("Command '{label}' failed: {message}")]
    HandlerFailed { label: String, message: String },

    /// No binding exists for the requested label.
    #[error("Unknown command: {label}")]
    UnknownCommand { label: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CmdTreeError {
    /// Whether this error came from the state propagation step.
    pub fn is_propagation(&self) -> bool {
        matches!(
            self,
            CmdTreeError::PropagationTypeMismatch { .. } | CmdTreeError::PropagationDenied { .. }
        )
    }
}

/// Result type alias for cmdtree operations.
pub type Result<T> = std::result::Result<T, CmdTreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = CmdTreeError::ConfigNotFound {
            path: PathBuf::from("/foo/cmdtree.yml"),
        };
        assert!(err.to_string().contains("/foo/cmdtree.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CmdTreeError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn validation_error_displays_key_and_message() {
        let err = CmdTreeError::ConfigValidationError {
            key: "port".into(),
            message: "Cannot parse number \"80a\"".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("port"));
        assert!(msg.contains("80a"));
    }

    #[test]
    fn type_mismatch_names_both_kinds() {
        let err = CmdTreeError::PropagationTypeMismatch {
            field: "target".into(),
            parent: "account".into(),
            child: "info".into(),
            expected: StateKind::Text,
            found: StateKind::Integer,
        };
        let msg = err.to_string();
        assert!(msg.contains("target"));
        assert!(msg.contains("text"));
        assert!(msg.contains("integer"));
        assert!(err.is_propagation());
    }

    #[test]
    fn denied_is_propagation() {
        let err = CmdTreeError::PropagationDenied {
            field: "target".into(),
            parent: "a".into(),
            child: "b".into(),
        };
        assert!(err.is_propagation());
        assert!(err.to_string().contains("sealed"));
    }

    #[test]
    fn handler_failed_is_not_propagation() {
        let err = CmdTreeError::HandlerFailed {
            label: "grant".into(),
            message: "boom".into(),
        };
        assert!(!err.is_propagation());
        assert!(err.to_string().contains("grant"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CmdTreeError = io_err.into();
        assert!(matches!(err, CmdTreeError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let err: CmdTreeError = anyhow_err.into();
        assert!(matches!(err, CmdTreeError::Other(_)));
        assert!(err.to_string().contains("something went wrong"));
    }
}
