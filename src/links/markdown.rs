//! Markdown link extraction

use crate::config::LineAttribution;
use crate::models::LinkEntry;
use regex::Regex;
use std::sync::OnceLock;

fn link_pattern() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"))
}

/// 1-based line of a byte offset
fn line_at(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

/// Extract every `[text](target)` link in appearance order.
///
/// Bare URLs are ignored.
pub fn extract_links(content: &str, attribution: LineAttribution) -> Vec<LinkEntry> {
    link_pattern()
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let text = caps.get(1)?.as_str();
            let url = caps.get(2)?;
            let offset = match attribution {
                LineAttribution::FirstOccurrence => {
                    content.find(url.as_str()).unwrap_or(url.start())
                }
                LineAttribution::PerMatch => whole.start(),
            };
            Some(LinkEntry {
                text: text.to_string(),
                url: url.as_str().to_string(),
                line: line_at(content, offset),
            })
        })
        .collect()
}
