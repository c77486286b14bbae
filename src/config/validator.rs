//! Manifest validation rules.
//!
//! This module validates a manifest for correctness:
//! - Command names must be non-empty and contain no whitespace
//! - Aliases must not collide with other names or aliases
//! - A database section, if present, must process cleanly

use crate::config::database::DatabaseInfoSection;
use crate::config::schema::Manifest;
use crate::error::{CmdTreeError, Result};
use std::collections::HashMap;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Command name if error is command-specific
    pub command: Option<String>,
}

/// Validate a manifest and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_manifest(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_names(manifest));
    errors.extend(validate_aliases(manifest));
    errors.extend(validate_database(manifest));

    errors
}

fn validate_names(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (name, entry) in &manifest.commands {
        for label in std::iter::once(name).chain(entry.aliases.iter()) {
            if label.trim().is_empty() {
                errors.push(ValidationError {
                    rule: "empty-name".to_string(),
                    message: format!("Command '{}' has an empty name or alias", name),
                    command: Some(name.clone()),
                });
            } else if label.chars().any(char::is_whitespace) {
                errors.push(ValidationError {
                    rule: "invalid-name".to_string(),
                    message: format!("'{}' contains whitespace and can never be typed", label),
                    command: Some(name.clone()),
                });
            }
        }
    }

    errors
}

fn validate_aliases(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut owners: HashMap<String, &str> = manifest
        .commands
        .keys()
        .map(|name| (name.to_ascii_lowercase(), name.as_str()))
        .collect();

    for (name, entry) in &manifest.commands {
        for alias in &entry.aliases {
            let key = alias.to_ascii_lowercase();
            match owners.get(key.as_str()) {
                Some(owner) if *owner == name.as_str() => {
                    errors.push(ValidationError {
                        rule: "redundant-alias".to_string(),
                        message: format!("Command '{}' lists '{}' twice", name, alias),
                        command: Some(name.clone()),
                    });
                }
                Some(owner) => {
                    errors.push(ValidationError {
                        rule: "duplicate-alias".to_string(),
                        message: format!(
                            "Alias '{}' of '{}' is already used by '{}'",
                            alias, name, owner
                        ),
                        command: Some(name.clone()),
                    });
                }
                None => {
                    owners.insert(key, name.as_str());
                }
            }
        }
    }

    errors
}

fn validate_database(manifest: &Manifest) -> Vec<ValidationError> {
    let Some(value) = &manifest.database else {
        return Vec::new();
    };

    match DatabaseInfoSection::from_value(value).and_then(|section| section.structure_info()) {
        Ok(_) => Vec::new(),
        Err(e) => vec![ValidationError {
            rule: "invalid-database".to_string(),
            message: e.to_string(),
            command: None,
        }],
    }
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(manifest: &Manifest) -> Result<()> {
    let errors = validate_manifest(manifest);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(CmdTreeError::ConfigValidationError {
            key: "manifest".to_string(),
            message: messages.join("; "),
        })
    }
}
