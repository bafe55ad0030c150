//! Link audit over a research file

use super::http::{HttpProbe, LinkProbe};
use super::markdown::extract_links;
use crate::config::AuditConfig;
use crate::models::{AuditReport, Issue, LinkCheckResult, LinkEntry, Unsupported};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that stop an audit before any link is checked
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Audit progress, reported around each link check
#[derive(Debug)]
pub enum Progress<'a> {
    /// The link is about to be requested
    Checking(&'a LinkEntry),
    /// The request finished
    Checked {
        entry: &'a LinkEntry,
        result: &'a LinkCheckResult,
    },
}

/// Sequential link auditor
pub struct Auditor<P: LinkProbe> {
    probe: P,
    config: AuditConfig,
}

impl Auditor<HttpProbe> {
    /// Auditor that checks links over HTTP
    pub fn http(config: AuditConfig) -> Self {
        let probe = HttpProbe::new(&config);
        Self::new(probe, config)
    }
}

impl<P: LinkProbe> Auditor<P> {
    pub fn new(probe: P, config: AuditConfig) -> Self {
        Self { probe, config }
    }

    /// Read a research file and extract its links
    pub fn load(&self, path: &Path) -> Result<Vec<LinkEntry>, AuditError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AuditError::FileNotFound(path.to_path_buf()),
            _ => AuditError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let links = extract_links(&content, self.config.line_attribution);
        debug!("Extracted {} links from {}", links.len(), path.display());
        Ok(links)
    }

    /// Check links one at a time, calling `on_progress` before and after each check
    pub fn run<F>(&self, links: &[LinkEntry], mut on_progress: F) -> AuditReport
    where
        F: FnMut(Progress<'_>),
    {
        let mut report = AuditReport::default();

        for entry in links {
            if self.config.is_skipped(&entry.url) {
                report.skipped += 1;
                continue;
            }

            on_progress(Progress::Checking(entry));
            let result = self.probe.check(&entry.url);
            report.total += 1;
            record(&mut report, entry, &result);
            on_progress(Progress::Checked {
                entry,
                result: &result,
            });
        }

        info!(
            "Audit complete: {} checked, {} valid, {} invalid, {} redirected, {} skipped",
            report.total, report.valid, report.invalid, report.redirected, report.skipped
        );
        report
    }

    /// Load a file and audit all of its links
    pub fn audit_file<F>(&self, path: &Path, on_progress: F) -> Result<AuditReport, AuditError>
    where
        F: FnMut(Progress<'_>),
    {
        let links = self.load(path)?;
        Ok(self.run(&links, on_progress))
    }
}

fn record(report: &mut AuditReport, entry: &LinkEntry, result: &LinkCheckResult) {
    if result.valid {
        report.valid += 1;
        if let Some(new_url) = &result.final_url {
            report.redirected += 1;
            report.issues.push(Issue::Redirect {
                line: entry.line,
                old_url: entry.url.clone(),
                new_url: new_url.clone(),
            });
        }
    } else {
        report.invalid += 1;
        let error = match (&result.error, result.status_code) {
            (Some(error), _) => error.clone(),
            (None, Some(code)) => format!("HTTP {}", code),
            (None, None) => "Unknown error".to_string(),
        };
        report.issues.push(Issue::Broken {
            line: entry.line,
            url: entry.url.clone(),
            status_code: result.status_code,
            error,
        });
    }
}

/// Rewrite broken and redirected links in place.
///
/// Accepted by `--fix` but not available yet.
pub fn apply_fixes(report: &AuditReport, path: &Path) -> Result<usize, Unsupported> {
    debug!(
        "Auto-fix requested for {} ({} issues)",
        path.display(),
        report.issues.len()
    );
    Err(Unsupported::AutoFix)
}
