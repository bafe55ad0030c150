//! CLI definitions and handlers for both tools

pub mod audit;
pub mod score;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Score the authority of a research source
#[derive(Parser, Debug)]
#[command(name = "authority-scorer")]
#[command(
    version,
    about = "Score research material authority (source, freshness, depth, community)",
    after_help = "\
Examples:
  authority-scorer --url https://kubernetes.io/docs/concepts/
  authority-scorer --url https://medium.com/x/y --date 2024-03-01 --type tutorial
  authority-scorer --url https://github.com/org/repo/blob/main/DESIGN.md --stars 2500 --report"
)]
pub struct ScoreCli {
    /// URL to score (prints this help when omitted)
    #[arg(long)]
    pub url: Option<String>,

    /// Content date (YYYY-MM-DD, YYYY/MM/DD, "Mar 05, 2024" or "05 Mar 2024")
    #[arg(long)]
    pub date: Option<String>,

    /// Content type
    #[arg(long = "type", default_value = "guide", value_parser = crate::config::CONTENT_TYPES)]
    pub content_type: String,

    /// GitHub stars
    #[arg(long, default_value = "0")]
    pub stars: u64,

    /// Score all URLs in a markdown file (not yet implemented)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the full breakdown as JSON
    #[arg(long)]
    pub report: bool,

    /// Disable emoji in output
    #[arg(long)]
    pub no_emoji: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = LOG_LEVELS)]
    pub log_level: String,
}

/// Check every link in a research markdown file
#[derive(Parser, Debug)]
#[command(name = "link-auditor")]
#[command(
    version,
    about = "Validate the links in a research markdown file (broken links, redirects)",
    after_help = "\
Examples:
  link-auditor research/kubernetes.md
  link-auditor research/kubernetes.md --timeout 10
  link-auditor research/kubernetes.md --format json > links.json

Exit code is 1 when any link is broken, 0 otherwise (redirects do not fail)."
)]
pub struct AuditCli {
    /// Research markdown file to check
    pub file: PathBuf,

    /// Auto-fix broken links (not yet implemented)
    #[arg(long)]
    pub fix: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = crate::config::DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Output format: text, json
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Report the line each link appears on, instead of the line of the URL's first mention
    #[arg(long)]
    pub exact_lines: bool,

    /// Disable emoji in output
    #[arg(long)]
    pub no_emoji: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = LOG_LEVELS)]
    pub log_level: String,
}

/// Initialize logging to stderr; `RUST_LOG` overrides `level`
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Print a top-level failure and pick the exit code
pub fn exit_code(result: anyhow::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions() {
        ScoreCli::command().debug_assert();
        AuditCli::command().debug_assert();
    }

    #[test]
    fn test_score_defaults() {
        let cli = ScoreCli::try_parse_from(["authority-scorer", "--url", "https://a.io"])
            .expect("parse");
        assert_eq!(cli.content_type, "guide");
        assert_eq!(cli.stars, 0);
        assert!(!cli.report);
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_score_rejects_unknown_type() {
        assert!(ScoreCli::try_parse_from(["authority-scorer", "--type", "podcast"]).is_err());
        assert!(ScoreCli::try_parse_from(["authority-scorer", "--type", "api-reference"]).is_ok());
    }

    #[test]
    fn test_audit_args() {
        let cli = AuditCli::try_parse_from(["link-auditor", "notes.md"]).expect("parse");
        assert_eq!(cli.timeout, 5);
        assert_eq!(cli.format, "text");
        assert!(!cli.fix);

        let cli = AuditCli::try_parse_from(["link-auditor", "notes.md", "--timeout", "12", "--fix"])
            .expect("parse");
        assert_eq!(cli.timeout, 12);
        assert!(cli.fix);

        assert!(AuditCli::try_parse_from(["link-auditor"]).is_err());
        assert!(AuditCli::try_parse_from(["link-auditor", "notes.md", "--timeout", "0"]).is_err());
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(Ok(0)), 0);
        assert_eq!(exit_code(Ok(1)), 1);
        assert_eq!(exit_code(Err(anyhow::anyhow!("boom"))), 1);
    }
}
