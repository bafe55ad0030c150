//! link-auditor command

use super::AuditCli;
use crate::config::{AuditConfig, LineAttribution};
use crate::links::{apply_fixes, Auditor, Progress};
use crate::reporters::{self, OutputFormat};
use anyhow::Result;
use std::io::Write;
use std::str::FromStr;

/// Run the auditor, returning the process exit code
pub fn run(cli: AuditCli) -> Result<i32> {
    let format = OutputFormat::from_str(&cli.format)?;
    let emoji = !cli.no_emoji;
    let attribution = if cli.exact_lines {
        LineAttribution::PerMatch
    } else {
        LineAttribution::FirstOccurrence
    };
    let config = AuditConfig::default()
        .with_timeout_secs(cli.timeout)
        .with_line_attribution(attribution);
    let auditor = Auditor::http(config);

    // Progress goes to stdout only in text mode so JSON stays parseable
    let text = format == OutputFormat::Text;
    let links = auditor.load(&cli.file)?;
    if text {
        println!("{}", reporters::audit_header(&cli.file));
    }
    let report = auditor.run(&links, |progress| {
        if !text {
            return;
        }
        let out = reporters::progress_text(&progress, emoji);
        match progress {
            Progress::Checking(_) => {
                // Show the pending URL while the request runs
                print!("{}", out);
                let _ = std::io::stdout().flush();
            }
            Progress::Checked { .. } => println!("{}", out),
        }
    });

    let rendered = reporters::render_audit(&report, &cli.file, format, emoji)?;
    if text {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }

    if cli.fix {
        match apply_fixes(&report, &cli.file) {
            Ok(fixed) => eprintln!("Fixed {} links in {}", fixed, cli.file.display()),
            Err(unsupported) => eprintln!("{}", unsupported),
        }
    }

    Ok(report.exit_code())
}
