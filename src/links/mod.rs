//! Research link auditing
//!
//! - `markdown`: extracts `[text](url)` links with line numbers
//! - `http`: checks a link's reachability (HEAD, redirects followed)
//! - `audit`: runs checks sequentially and aggregates an [`AuditReport`]
//!
//! [`AuditReport`]: crate::models::AuditReport

mod audit;
mod http;
mod markdown;

pub use audit::{apply_fixes, AuditError, Auditor, Progress};
pub use http::{classify_response, request_target, HttpProbe, LinkProbe};
pub use markdown::extract_links;
