//! Mock sender for testing.
//!
//! `MockSender` implements the `CommandSender` trait and captures all
//! messages for later assertion. Permissions can be restricted to an explicit
//! set.
//!
//! # Example
//!
//! ```
//! use cmdtree::sender::{CommandSender, MockSender};
//!
//! let mut sender = MockSender::new("alice").with_permissions(["account.info"]);
//! sender.send_message("Starting");
//! sender.send_error("Nope");
//!
//! assert!(sender.has_message("Starting"));
//! assert!(sender.has_error("Nope"));
//! assert!(sender.has_permission("account.info"));
//! assert!(!sender.has_permission("account.grant"));
//! ```

use std::collections::HashSet;

use super::CommandSender;

/// Mock sender implementation for testing.
#[derive(Debug, Default)]
pub struct MockSender {
    name: String,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    /// `None` grants every permission.
    permissions: Option<HashSet<String>>,
}

impl MockSender {
    /// Create a sender holding every permission.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Restrict the sender to the given permissions.
    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.errors.clear();
    }
}

impl CommandSender for MockSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn send_success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn send_error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .as_ref()
            .map_or(true, |granted| granted.contains(permission))
    }
}
