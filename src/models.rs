//! Core data models for research-prep
//!
//! These models are shared by the authority scorer, the link auditor
//! and the reporters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Star-tier rating derived from a total authority score
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    #[default]
    Minimal,
    Weak,
    Solid,
    Strong,
    Exceptional,
}

impl Rating {
    /// Number of stars (1-5) this tier renders as
    pub fn stars(&self) -> usize {
        match self {
            Rating::Minimal => 1,
            Rating::Weak => 2,
            Rating::Solid => 3,
            Rating::Strong => 4,
            Rating::Exceptional => 5,
        }
    }

    /// Star glyphs, or plain asterisks when emoji are disabled
    pub fn glyphs(&self, emoji: bool) -> String {
        let star = if emoji { "⭐" } else { "*" };
        star.repeat(self.stars())
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Minimal => write!(f, "minimal"),
            Rating::Weak => write!(f, "weak"),
            Rating::Solid => write!(f, "solid"),
            Rating::Strong => write!(f, "strong"),
            Rating::Exceptional => write!(f, "exceptional"),
        }
    }
}

/// Authority score of a single source, component by component.
///
/// Only [`crate::scoring`] builds these, so `total` is always the exact sum
/// of the four components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Domain reputation (0-40)
    pub source_authority: u32,
    /// Content freshness (0-30)
    pub timeliness: u32,
    /// Depth implied by the content type (0-20)
    pub technical_depth: u32,
    /// Stars, or implied recognition for official sources (0-10)
    pub community_recognition: u32,
    /// Sum of the components (0-100)
    pub total: u32,
    pub rating: Rating,
}

impl ScoreBreakdown {
    /// Components in display order, keyed by their report names
    pub fn components(&self) -> [(&'static str, u32); 4] {
        [
            ("source_authority", self.source_authority),
            ("timeliness", self.timeliness),
            ("technical_depth", self.technical_depth),
            ("community_recognition", self.community_recognition),
        ]
    }
}

/// A markdown link found in a research file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub text: String,
    pub url: String,
    /// 1-based line number
    pub line: usize,
}

/// Outcome of a single reachability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LinkCheckResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Effective URL after redirects, only when it differs from the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_url: Option<String>,
    /// Transport error description, only when no response was received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkCheckResult {
    pub fn reachable(status_code: u16, final_url: Option<String>) -> Self {
        Self {
            valid: status_code < 400,
            status_code: Some(status_code),
            final_url: final_url.filter(|_| status_code < 400),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            status_code: None,
            final_url: None,
            error: Some(error.into()),
        }
    }

    /// Short failure label used in progress lines ("404" or "Error")
    pub fn failure_label(&self) -> String {
        match self.status_code {
            Some(code) => code.to_string(),
            None => "Error".to_string(),
        }
    }
}

/// Something worth a maintainer's attention in a research file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Issue {
    Broken {
        line: usize,
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
        /// Transport error, or `HTTP <code>` for error statuses
        error: String,
    },
    Redirect {
        line: usize,
        old_url: String,
        new_url: String,
    },
}

impl Issue {
    pub fn line(&self) -> usize {
        match self {
            Issue::Broken { line, .. } | Issue::Redirect { line, .. } => *line,
        }
    }
}

/// Aggregate result of auditing one research file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuditReport {
    /// Links considered (anchors and root-relative links excluded)
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Valid links whose final URL differs from the written one
    pub redirected: usize,
    /// Anchors and root-relative links that were not checked
    pub skipped: usize,
    pub issues: Vec<Issue>,
}

impl AuditReport {
    /// Process exit status: redirects alone never fail a run
    pub fn exit_code(&self) -> i32 {
        if self.invalid == 0 {
            0
        } else {
            1
        }
    }
}

/// Declared capabilities that are deliberately not implemented
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    #[error("File scoring not yet implemented")]
    BatchFileScoring,

    #[error("Auto-fix not yet implemented; links were checked but not rewritten")]
    AutoFix,
}
