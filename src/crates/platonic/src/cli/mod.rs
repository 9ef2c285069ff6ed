//! CLI command implementations
//!
//! Provides command handlers for the platonic CLI binary.

pub mod catalog;
pub mod interactive;
pub mod oracle;

use crate::catalog::CategoryStatus;
use colored::{ColoredString, Colorize};
use std::fmt;
use std::str::FromStr;

/// Output format for commands that support `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Colored label for a registry status
pub fn status_badge(status: CategoryStatus) -> ColoredString {
    let label = status.label();
    match status {
        CategoryStatus::Declared => label.green().bold(),
        CategoryStatus::Empty => label.red().bold(),
        CategoryStatus::Candidate => label.yellow().bold(),
        CategoryStatus::Deprecated => label.dimmed(),
        CategoryStatus::SplitRequired => label.magenta().bold(),
        CategoryStatus::Rejected => label.red(),
    }
}

/// Cut `text` to at most `max` characters, marking the cut with "..."
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
