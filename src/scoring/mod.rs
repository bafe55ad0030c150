//! Research Source Authority Scoring
//!
//! Scores a single source URL on four independent components and a
//! star-tier rating.
//!
//! # Scoring Formula
//!
//! ```text
//! Total = Source Authority (0-40)
//!       + Timeliness       (0-30)
//!       + Technical Depth  (0-20)
//!       + Community        (0-10)
//! ```
//!
//! - **Source authority**: first matching domain rule (official docs,
//!   official repositories, standards, vendor docs, GitHub file views,
//!   blog platforms)
//! - **Timeliness**: age of the publish date, from 30 (< 3 months) down to
//!   5 (2 years or older); 0 without a usable date
//! - **Technical depth**: fixed table keyed by content type
//! - **Community**: GitHub stars, or a full 10 for any source scoring 35+
//!
//! # Rating
//!
//! | Total  | Rating      |
//! |--------|-------------|
//! | 90+    | ⭐⭐⭐⭐⭐ |
//! | 75-89  | ⭐⭐⭐⭐   |
//! | 60-74  | ⭐⭐⭐     |
//! | 40-59  | ⭐⭐       |
//! | 0-39   | ⭐         |

mod source;
mod timeliness;

pub use source::{host_of, matching_rule, score_source_authority};
pub use timeliness::{parse_date, score_age, score_timeliness, DateParse};

use crate::config::ScoringRules;
use crate::models::{Rating, ScoreBreakdown, Unsupported};
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::{debug, info};

/// Depth score for a content type tag (case-insensitive, unknown tags get the default)
pub fn score_technical_depth(rules: &ScoringRules, content_type: &str) -> u32 {
    let tag = content_type.to_lowercase();
    rules
        .depth
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, score)| *score)
        .unwrap_or(rules.default_depth)
}

/// Community recognition from stars; official sources are assumed recognised
pub fn score_community_recognition(rules: &ScoringRules, stars: u64, source_authority: u32) -> u32 {
    if source_authority >= rules.official_threshold {
        return rules.official_recognition;
    }
    rules
        .star_tiers
        .iter()
        .find(|(above, _)| stars > *above)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}

/// Rating tier for a total score
pub fn rating_for(rules: &ScoringRules, total: u32) -> Rating {
    rules
        .rating_thresholds
        .iter()
        .find(|(min, _)| total >= *min)
        .map(|(_, rating)| *rating)
        .unwrap_or(Rating::Minimal)
}

/// Score a source against the current local time
pub fn calculate(url: &str, date: Option<&str>, content_type: &str, stars: u64) -> ScoreBreakdown {
    calculate_at(
        ScoringRules::global(),
        url,
        date,
        content_type,
        stars,
        chrono::Local::now().naive_local(),
    )
}

/// Score a source with explicit rules and reference time
pub fn calculate_at(
    rules: &ScoringRules,
    url: &str,
    date: Option<&str>,
    content_type: &str,
    stars: u64,
    now: NaiveDateTime,
) -> ScoreBreakdown {
    let source_authority = score_source_authority(rules, url).min(40);
    let timeliness = score_timeliness(rules, date, now).min(30);
    let technical_depth = score_technical_depth(rules, content_type).min(20);
    let community_recognition = score_community_recognition(rules, stars, source_authority).min(10);

    debug!(
        "Components: source={}, timeliness={}, depth={}, community={}",
        source_authority, timeliness, technical_depth, community_recognition
    );

    let total = source_authority + timeliness + technical_depth + community_recognition;
    let rating = rating_for(rules, total);

    info!("Authority score for {}: {} ({})", url, total, rating);

    ScoreBreakdown {
        source_authority,
        timeliness,
        technical_depth,
        community_recognition,
        total,
        rating,
    }
}

/// Score every URL in a markdown file.
///
/// Declared for the `--file` flag but not available yet.
pub fn score_file(path: &Path) -> Result<Vec<ScoreBreakdown>, Unsupported> {
    debug!("Batch scoring requested for {}", path.display());
    Err(Unsupported::BatchFileScoring)
}
