//! Invoking identities.
//!
//! A [`CommandSender`] is whoever typed the command: it has a name, can be
//! messaged, and may hold permissions. Handlers receive it on every dispatch
//! step.
//!
//! - [`ConsoleSender`] writes to the terminal with [`SenderTheme`] styling
//! - [`MockSender`] captures everything for assertions in tests

pub mod console;
pub mod mock;
pub mod theme;

pub use console::ConsoleSender;
pub use mock::MockSender;
pub use theme::{should_use_colors, SenderTheme};

/// The identity a command is executed on behalf of.
pub trait CommandSender {
    /// Display name of the sender.
    fn name(&self) -> &str;

    /// Send an informational message.
    fn send_message(&mut self, msg: &str);

    /// Send a success message.
    fn send_success(&mut self, msg: &str) {
        self.send_message(msg);
    }

    /// Send an error message.
    fn send_error(&mut self, msg: &str);

    /// Whether the sender holds a permission node.
    fn has_permission(&self, _permission: &str) -> bool {
        true
    }
}
