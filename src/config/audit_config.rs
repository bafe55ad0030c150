//! Link audit settings

use std::time::Duration;

/// Default per-request timeout for reachability checks
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// How a link's line number is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAttribution {
    /// Line of the first occurrence of the URL anywhere in the document.
    /// Repeated URLs all report the first line; kept as the default so line
    /// numbers match earlier audit reports.
    #[default]
    FirstOccurrence,
    /// Line where each link actually appears
    PerMatch,
}

/// Settings for one link audit run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Bound on each reachability check, redirects included
    pub timeout: Duration,
    pub max_redirects: u32,
    pub user_agent: String,
    /// Link targets with these prefixes are skipped entirely
    pub skip_prefixes: Vec<String>,
    pub line_attribution: LineAttribution,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: 10,
            user_agent: format!("research-prep/{}", env!("CARGO_PKG_VERSION")),
            skip_prefixes: vec!["#".to_string(), "/".to_string()],
            line_attribution: LineAttribution::default(),
        }
    }
}

impl AuditConfig {
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_line_attribution(mut self, attribution: LineAttribution) -> Self {
        self.line_attribution = attribution;
        self
    }

    /// Whether a link target is excluded from checking
    pub fn is_skipped(&self, url: &str) -> bool {
        self.skip_prefixes.iter().any(|p| url.starts_with(p.as_str()))
    }
}
