//! Source authority (0-40) from domain reputation

use crate::config::{AuthorityRule, MatchTarget, RulePredicate, ScoringRules};
use tracing::debug;

/// Lowercased host of `url` without the port, or "" when it does not parse as an absolute URL
pub fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
        .unwrap_or_default()
}

impl AuthorityRule {
    /// Whether this rule applies to a URL with the given (lowercased) host
    pub fn matches(&self, host: &str, url_lower: &str) -> bool {
        match &self.predicate {
            RulePredicate::Patterns(patterns) => patterns.iter().any(|(target, re)| {
                let haystack = match target {
                    MatchTarget::Host => host,
                    MatchTarget::Url => url_lower,
                };
                re.is_match(haystack)
            }),
            RulePredicate::HostAndPath { host: h, path } => {
                host.contains(h) && url_lower.contains(path)
            }
            RulePredicate::HostContainsAny(fragments) => {
                fragments.iter().any(|f| host.contains(f))
            }
        }
    }
}

/// First matching rule for `url`, if any
pub fn matching_rule<'r>(rules: &'r ScoringRules, url: &str) -> Option<&'r AuthorityRule> {
    let host = host_of(url);
    let url_lower = url.to_lowercase();
    rules
        .authority
        .iter()
        .find(|rule| rule.matches(&host, &url_lower))
}

/// Score a URL's source authority
pub fn score_source_authority(rules: &ScoringRules, url: &str) -> u32 {
    match matching_rule(rules, url) {
        Some(rule) => {
            debug!("{} matched authority rule '{}' ({})", url, rule.name, rule.score);
            rule.score
        }
        None => {
            debug!("{} matched no authority rule", url);
            0
        }
    }
}
