//! Visual theme for console output.

use console::Style;

/// Styles applied to sender messages.
#[derive(Debug, Clone)]
pub struct SenderTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for command labels (bold).
    pub label: Style,
}

impl Default for SenderTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SenderTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            label: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            label: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a command label with an optional dim description.
    pub fn format_label(&self, label: &str, description: Option<&str>) -> String {
        match description {
            Some(description) => format!(
                "{} {}",
                self.label.apply_to(label),
                self.dim.apply_to(format!("- {}", description))
            ),
            None => format!("{}", self.label.apply_to(label)),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
