//! JSON reporter
//!
//! Structured output for downstream tooling (jq, CI scripts).

use crate::models::{AuditReport, Rating, ScoreBreakdown};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ScoreJson {
    total: u32,
    breakdown: BreakdownJson,
    rating: String,
    tier: Rating,
    stars: usize,
}

#[derive(Serialize)]
struct BreakdownJson {
    source_authority: u32,
    timeliness: u32,
    technical_depth: u32,
    community_recognition: u32,
}

#[derive(Serialize)]
struct AuditJson<'a> {
    file: String,
    #[serde(flatten)]
    report: &'a AuditReport,
}

/// Render a score breakdown as pretty-printed JSON
pub fn render_score(breakdown: &ScoreBreakdown, emoji: bool) -> Result<String> {
    let out = ScoreJson {
        total: breakdown.total,
        breakdown: BreakdownJson {
            source_authority: breakdown.source_authority,
            timeliness: breakdown.timeliness,
            technical_depth: breakdown.technical_depth,
            community_recognition: breakdown.community_recognition,
        },
        rating: breakdown.rating.glyphs(emoji),
        tier: breakdown.rating,
        stars: breakdown.rating.stars(),
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Render an audit report as pretty-printed JSON
pub fn render_audit(report: &AuditReport, path: &Path) -> Result<String> {
    let out = AuditJson {
        file: path.display().to_string(),
        report,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_audit, test_breakdown};

    #[test]
    fn test_score_json_shape() {
        let json_str = render_score(&test_breakdown(), true).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["total"], 91);
        assert_eq!(parsed["breakdown"]["source_authority"], 38);
        assert_eq!(parsed["breakdown"]["community_recognition"], 10);
        assert_eq!(parsed["rating"], "⭐⭐⭐⭐⭐");
        assert_eq!(parsed["tier"], "exceptional");
        assert_eq!(parsed["stars"], 5);
    }

    #[test]
    fn test_score_json_without_emoji() {
        let json_str = render_score(&test_breakdown(), false).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["rating"], "*****");
    }

    #[test]
    fn test_audit_json_shape() {
        let json_str = render_audit(&test_audit(), Path::new("notes/research.md")).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["file"], "notes/research.md");
        assert_eq!(parsed["total"], 3);
        assert_eq!(parsed["invalid"], 1);
        let issues = parsed["issues"].as_array().expect("issues array");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0]["type"], "redirect");
        assert_eq!(issues[1]["type"], "broken");
        assert_eq!(issues[1]["status_code"], 404);
    }
}
