//! Content freshness (0-30) from a publish date

use crate::config::ScoringRules;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

/// Result of trying every accepted date format on an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParse {
    /// First format that accepted the input, and the date it produced
    Parsed {
        date: NaiveDate,
        format: &'static str,
    },
    /// No format accepted the input
    Unparsed { input: String, tried: usize },
}

/// Try the configured formats in order; the first success wins
pub fn parse_date(rules: &ScoringRules, input: &str) -> DateParse {
    let trimmed = input.trim();
    for format in rules.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return DateParse::Parsed { date, format };
        }
    }
    DateParse::Unparsed {
        input: input.to_string(),
        tried: rules.date_formats.len(),
    }
}

/// Bucket the age of `date` relative to `now`
pub fn score_age(rules: &ScoringRules, date: NaiveDate, now: NaiveDateTime) -> u32 {
    let age = now - date.and_time(chrono::NaiveTime::MIN);
    rules
        .freshness
        .iter()
        .find(|(days, _)| age < chrono::Duration::days(*days))
        .map(|(_, score)| *score)
        .unwrap_or(rules.stale_score)
}

/// Score a publish date; missing and unparsable dates both score 0
pub fn score_timeliness(rules: &ScoringRules, date: Option<&str>, now: NaiveDateTime) -> u32 {
    let Some(input) = date else {
        return 0;
    };
    match parse_date(rules, input) {
        DateParse::Parsed { date, format } => {
            let score = score_age(rules, date, now);
            debug!("Date '{}' parsed as {} ({}) -> {}", input, date, format, score);
            score
        }
        DateParse::Unparsed { input, tried } => {
            debug!("Date '{}' matched none of {} formats, timeliness 0", input, tried);
            0
        }
    }
}
