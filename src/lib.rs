//! research-prep - Research reference quality tools
//!
//! Two independent tools over curated markdown reference lists:
//! - `authority-scorer`: heuristic 0-100 authority score for a source URL
//! - `link-auditor`: finds broken and redirected links in a markdown file

pub mod cli;
pub mod config;
pub mod links;
pub mod models;
pub mod reporters;
pub mod scoring;
