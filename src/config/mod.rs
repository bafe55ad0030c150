//! Configuration module for research-prep
//!
//! Neither tool reads configuration files. This module holds the typed,
//! immutable configuration both tools run with:
//! - Authority scoring rule tables (domains, date formats, depth, thresholds)
//! - Link audit settings (timeout, redirects, line attribution)

mod audit_config;
mod scoring_rules;

pub use audit_config::{AuditConfig, LineAttribution, DEFAULT_TIMEOUT_SECS};
pub use scoring_rules::{AuthorityRule, MatchTarget, RulePredicate, ScoringRules, CONTENT_TYPES};
