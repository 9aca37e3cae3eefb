//! Color theme for CLI output

use super::icons::StatusIcon;
use colored::{Color, Colorize};

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: Color,
    pub error: Color,
    pub info: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
        }
    }
}

impl ColorTheme {
    /// Get color based on stage outcome
    pub fn get_outcome_color(&self, ok: bool) -> Color {
        if ok {
            self.success
        } else {
            self.error
        }
    }

    /// Prefix a message with the outcome icon, both colored
    pub fn status_line(&self, ok: bool, message: &str) -> String {
        format!(
            "{} {}",
            StatusIcon::for_outcome(ok).color(self.get_outcome_color(ok)),
            message
        )
    }

    pub fn highlight(&self, text: &str) -> String {
        text.color(self.info).to_string()
    }
}
