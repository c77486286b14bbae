//! Terminal-backed sender.

use super::theme::{should_use_colors, SenderTheme};
use super::CommandSender;

/// Sender that prints to stdout and stderr.
#[derive(Debug, Clone)]
pub struct ConsoleSender {
    name: String,
    theme: SenderTheme,
}

impl ConsoleSender {
    /// Create a console sender, colored when the terminal supports it.
    pub fn new(name: impl Into<String>) -> Self {
        let theme = if should_use_colors() {
            SenderTheme::new()
        } else {
            SenderTheme::plain()
        };
        Self::with_theme(name, theme)
    }

    pub fn with_theme(name: impl Into<String>, theme: SenderTheme) -> Self {
        Self {
            name: name.into(),
            theme,
        }
    }

    pub fn theme(&self) -> &SenderTheme {
        &self.theme
    }
}

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn send_success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn send_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
