use colored::*;

/// Share of neighbors at or above which a genre score reads as strong.
const STRONG_PERCENT: f64 = 50.0;
const WEAK_PERCENT: f64 = 20.0;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn book(&self, text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn genre(&self, text: &str) -> ColoredString {
        text.magenta().bold()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn rank(&self, text: &str) -> ColoredString {
        text.bright_black()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.bright_white()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }

    /// Genre-match percentages: green when strong, yellow when middling, red when weak.
    pub fn percent(&self, text: &str, value: f64) -> ColoredString {
        if value >= STRONG_PERCENT {
            text.green()
        } else if value >= WEAK_PERCENT {
            text.yellow()
        } else {
            text.red()
        }
    }
}
