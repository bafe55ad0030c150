//! HTTP reachability checks
//!
//! Uses ureq (sync HTTP). Each link gets one HEAD request, redirects
//! followed, bounded by the configured timeout. Failures are never retried.

use crate::config::AuditConfig;
use crate::models::LinkCheckResult;
use tracing::{debug, warn};
use ureq::ResponseExt;

/// Anything that can decide whether a link is reachable
pub trait LinkProbe {
    fn check(&self, url: &str) -> LinkCheckResult;
}

/// Classify a received response.
///
/// `final_url` is the effective URL after redirects; it is reported only when
/// it differs from what was requested (compared after URL normalisation, so
/// `https://host` and `https://host/` are the same link).
pub fn classify_response(requested: &str, status_code: u16, final_url: &str) -> LinkCheckResult {
    let unchanged = final_url == requested
        || url::Url::parse(requested)
            .map(|u| u.as_str() == final_url)
            .unwrap_or(false);
    let redirected = if unchanged {
        None
    } else {
        Some(final_url.to_string())
    };
    LinkCheckResult::reachable(status_code, redirected)
}

/// URL as it goes on the wire: percent-encoded, fragment dropped.
///
/// Targets that do not parse are passed through so the request itself reports the error.
pub fn request_target(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_fragment(None);
            parsed.into()
        }
        Err(_) => url.to_string(),
    }
}

/// Probe backed by a ureq agent
pub struct HttpProbe {
    agent: ureq::Agent,
    user_agent: String,
}

impl HttpProbe {
    pub fn new(config: &AuditConfig) -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false) // 4xx/5xx are results, not errors
            .timeout_global(Some(config.timeout))
            .max_redirects(config.max_redirects)
            .build()
            .new_agent();
        Self {
            agent,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl LinkProbe for HttpProbe {
    fn check(&self, url: &str) -> LinkCheckResult {
        let target = request_target(url);
        let result = self
            .agent
            .head(&target)
            .header("User-Agent", &self.user_agent)
            .call();

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                let final_url = response.get_uri().to_string();
                debug!("HEAD {} -> {} ({})", target, status, final_url);
                classify_response(&target, status, &final_url)
            }
            Err(e) => {
                warn!("Link check failed for {}: {}", url, e);
                LinkCheckResult::failed(e.to_string())
            }
        }
    }
}
