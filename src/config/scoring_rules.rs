//! Built-in authority scoring tables
//!
//! ```text
//! official-docs   host   → 40   (language, framework and standards bodies)
//! official-repos  url    → 38   (trusted organisations on GitHub/GitLab)
//! standards       host   → 40   (RFC and standards-track publishers)
//! vendor-docs     host   → 35   (major cloud/platform documentation)
//! code-file       github.com + /blob/ → 25
//! blog-platform   medium.com, dev.to, hashnode → 5
//! ```
//!
//! Order matters: the first matching rule wins.

use crate::models::Rating;
use regex::Regex;
use std::sync::OnceLock;

/// What part of the URL a pattern is searched in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTarget {
    /// Lowercased host (empty for unparsable URLs)
    Host,
    /// The whole lowercased URL, path included
    Url,
}

/// Condition under which an authority rule applies
#[derive(Debug, Clone)]
pub enum RulePredicate {
    /// Any pattern found (unanchored search) in its target
    Patterns(Vec<(MatchTarget, Regex)>),
    /// Host contains `host` and the URL contains `path`
    HostAndPath {
        host: &'static str,
        path: &'static str,
    },
    /// Host contains any of the fragments
    HostContainsAny(&'static [&'static str]),
}

/// One row of the ordered source-authority table
#[derive(Debug, Clone)]
pub struct AuthorityRule {
    pub name: &'static str,
    pub predicate: RulePredicate,
    pub score: u32,
}

/// All lookup tables the authority scorer uses
#[derive(Debug, Clone)]
pub struct ScoringRules {
    /// Evaluated in order, first match wins; no match scores 0
    pub authority: Vec<AuthorityRule>,
    /// strftime formats tried in order
    pub date_formats: &'static [&'static str],
    /// (max age in days, exclusive) → score, ascending
    pub freshness: &'static [(i64, u32)],
    /// Score for anything older than the last freshness bucket
    pub stale_score: u32,
    /// Content type tag → depth score
    pub depth: &'static [(&'static str, u32)],
    pub default_depth: u32,
    /// Source authority at or above which recognition is implied
    pub official_threshold: u32,
    /// Recognition granted for official sources
    pub official_recognition: u32,
    /// (stars strictly above, score), descending
    pub star_tiers: &'static [(u64, u32)],
    /// (minimum total, rating), descending
    pub rating_thresholds: &'static [(u32, Rating)],
}

const OFFICIAL_DOCS: &[&str] = &[
    r"\.io$",
    r"kubernetes\.io",
    r"docker\.com",
    r"golang\.org",
    r"rust-lang\.org",
    r"python\.org",
    r"reactjs\.org",
    r"vuejs\.org",
    r"angular\.io",
    r"spring\.io",
    r"nginx\.org",
    r"apache\.org",
    r"mozilla\.org",
    r"w3\.org",
    r"ietf\.org",
];

const OFFICIAL_REPOS: &[&str] = &[
    r"github\.com/(kubernetes|docker|rust-lang|python|golang)",
    r"github\.com/(facebook|google|microsoft|apple|mozilla)",
    r"github\.com/cncf",
    r"gitlab\.com/(gitlab-org|gitlab-com)",
];

const STANDARDS: &[&str] = &[r"rfc-editor\.org", r"ietf\.org/rfc", r"w3\.org/tr"];

const VENDOR_DOCS: &[&str] = &[
    r"cloud\.google\.com",
    r"aws\.amazon\.com",
    r"azure\.microsoft\.com",
    r"developers\.google\.com",
    r"developer\.mozilla\.org",
];

const BLOG_PLATFORMS: &[&str] = &["medium.com", "dev.to", "hashnode"];

/// Content type tags accepted on the command line
pub const CONTENT_TYPES: [&str; 10] = [
    "architecture",
    "design",
    "rfc",
    "api-reference",
    "implementation",
    "source-code",
    "tutorial",
    "guide",
    "overview",
    "introduction",
];

const DEPTH_SCORES: &[(&str, u32)] = &[
    ("architecture", 20),
    ("design", 20),
    ("rfc", 20),
    ("api-reference", 18),
    ("implementation", 15),
    ("source-code", 15),
    ("tutorial", 10),
    ("guide", 10),
    ("overview", 5),
    ("introduction", 5),
];

fn compile(target: MatchTarget, patterns: &[&str]) -> Vec<(MatchTarget, Regex)> {
    patterns
        .iter()
        .map(|p| (target, Regex::new(p).expect("valid regex")))
        .collect()
}

impl ScoringRules {
    /// Rules shared by every scoring call in the process
    pub fn global() -> &'static ScoringRules {
        static RULES: OnceLock<ScoringRules> = OnceLock::new();
        RULES.get_or_init(ScoringRules::builtin)
    }

    /// Build the built-in tables
    pub fn builtin() -> Self {
        let authority = vec![
            AuthorityRule {
                name: "official-docs",
                predicate: RulePredicate::Patterns(compile(MatchTarget::Host, OFFICIAL_DOCS)),
                score: 40,
            },
            AuthorityRule {
                name: "official-repos",
                predicate: RulePredicate::Patterns(compile(MatchTarget::Url, OFFICIAL_REPOS)),
                score: 38,
            },
            AuthorityRule {
                name: "standards",
                predicate: RulePredicate::Patterns(compile(MatchTarget::Host, STANDARDS)),
                score: 40,
            },
            AuthorityRule {
                name: "vendor-docs",
                predicate: RulePredicate::Patterns(compile(MatchTarget::Host, VENDOR_DOCS)),
                score: 35,
            },
            AuthorityRule {
                name: "code-file",
                predicate: RulePredicate::HostAndPath {
                    host: "github.com",
                    path: "/blob/",
                },
                score: 25,
            },
            AuthorityRule {
                name: "blog-platform",
                predicate: RulePredicate::HostContainsAny(BLOG_PLATFORMS),
                score: 5,
            },
        ];

        Self {
            authority,
            date_formats: &["%Y-%m-%d", "%Y/%m/%d", "%b %d, %Y", "%d %b %Y"],
            freshness: &[(90, 30), (180, 25), (365, 20), (730, 10)],
            stale_score: 5,
            depth: DEPTH_SCORES,
            default_depth: 10,
            official_threshold: 35,
            official_recognition: 10,
            star_tiers: &[(10_000, 10), (1_000, 7), (100, 5)],
            rating_thresholds: &[
                (90, Rating::Exceptional),
                (75, Rating::Strong),
                (60, Rating::Solid),
                (40, Rating::Weak),
            ],
        }
    }

    /// Every score a source-authority lookup can produce
    pub fn authority_scores(&self) -> Vec<u32> {
        let mut scores: Vec<u32> = self.authority.iter().map(|r| r.score).collect();
        scores.push(0);
        scores.sort_unstable();
        scores.dedup();
        scores
    }
}
