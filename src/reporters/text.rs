//! Text (terminal) reporter with colors and formatting

use crate::links::Progress;
use crate::models::{AuditReport, Issue, Rating, ScoreBreakdown};
use console::style;
use std::path::Path;

/// Longest URL prefix shown in a progress line
const PROGRESS_URL_CHARS: usize = 60;

struct Marks {
    ok: &'static str,
    fail: &'static str,
    arrow: &'static str,
}

fn marks(emoji: bool) -> Marks {
    if emoji {
        Marks {
            ok: "✓",
            fail: "✗",
            arrow: "→",
        }
    } else {
        Marks {
            ok: "OK",
            fail: "FAIL",
            arrow: "->",
        }
    }
}

fn rating_style(rating: Rating, glyphs: String) -> String {
    match rating {
        Rating::Exceptional | Rating::Strong => style(glyphs).green().to_string(),
        Rating::Solid => style(glyphs).yellow().to_string(),
        Rating::Weak | Rating::Minimal => style(glyphs).red().to_string(),
    }
}

/// Render a score breakdown as a short summary
pub fn render_score(breakdown: &ScoreBreakdown, emoji: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Authority Score: {}/100\n",
        style(breakdown.total).bold()
    ));
    out.push_str(&format!(
        "Rating: {}\n",
        rating_style(breakdown.rating, breakdown.rating.glyphs(emoji))
    ));
    out.push_str("\nBreakdown:\n");
    for (name, score) in breakdown.components() {
        out.push_str(&format!("  {}: {}\n", name, score));
    }
    out
}

/// First line printed by an audit
pub fn audit_header(path: &Path) -> String {
    format!("Checking links in: {}\n", path.display())
}

/// Progress output: the `Checking: <url>... ` prefix before a request,
/// the mark (and redirect target) once it finishes
pub fn progress_text(progress: &Progress<'_>, emoji: bool) -> String {
    let m = marks(emoji);
    match progress {
        Progress::Checking(entry) => {
            let url: String = entry.url.chars().take(PROGRESS_URL_CHARS).collect();
            format!("Checking: {}... ", url)
        }
        Progress::Checked { result, .. } if result.valid => {
            let mut out = style(m.ok).green().to_string();
            if let Some(final_url) = &result.final_url {
                out.push_str(&format!(
                    "\n  {} Redirected to: {}",
                    style(m.arrow).yellow(),
                    final_url
                ));
            }
            out
        }
        Progress::Checked { result, .. } => {
            format!("{} ({})", style(m.fail).red(), result.failure_label())
        }
    }
}

/// Summary block and issue list printed after all checks
pub fn render_audit_summary(report: &AuditReport, emoji: bool) -> String {
    let m = marks(emoji);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "=".repeat(60)));
    out.push_str("Summary:\n");
    out.push_str(&format!("  Total links: {}\n", report.total));
    out.push_str(&format!("  Valid: {} {}\n", report.valid, style(m.ok).green()));
    out.push_str(&format!("  Invalid: {} {}\n", report.invalid, style(m.fail).red()));
    out.push_str(&format!(
        "  Redirected: {} {}\n",
        report.redirected,
        style(m.arrow).yellow()
    ));
    if report.skipped > 0 {
        out.push_str(&format!(
            "  Skipped: {} (anchors and relative links)\n",
            report.skipped
        ));
    }

    if !report.issues.is_empty() {
        out.push_str("\nIssues found:\n");
        for issue in &report.issues {
            match issue {
                Issue::Broken {
                    line, url, error, ..
                } => {
                    out.push_str(&format!(
                        "  Line {}: {} - {}\n",
                        line,
                        style("BROKEN").red().bold(),
                        url
                    ));
                    out.push_str(&format!("    Error: {}\n", error));
                }
                Issue::Redirect {
                    line,
                    old_url,
                    new_url,
                } => {
                    out.push_str(&format!(
                        "  Line {}: {}\n",
                        line,
                        style("REDIRECT").yellow().bold()
                    ));
                    out.push_str(&format!("    Old: {}\n", old_url));
                    out.push_str(&format!("    New: {}\n", new_url));
                }
            }
        }
    }

    out
}
