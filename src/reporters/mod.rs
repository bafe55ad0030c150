//! Output reporters for scores and audit results
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors and emoji
//! - `json` - Machine-readable JSON

mod json;
mod text;

pub use text::{audit_header, progress_text};

use crate::models::{AuditReport, ScoreBreakdown};
use anyhow::{anyhow, Result};
use std::path::Path;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render an authority score
pub fn render_score(breakdown: &ScoreBreakdown, format: OutputFormat, emoji: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_score(breakdown, emoji)),
        OutputFormat::Json => json::render_score(breakdown, emoji),
    }
}

/// Render the final part of an audit (summary and issues)
pub fn render_audit(
    report: &AuditReport,
    path: &Path,
    format: OutputFormat,
    emoji: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_audit_summary(report, emoji)),
        OutputFormat::Json => json::render_audit(report, path),
    }
}
