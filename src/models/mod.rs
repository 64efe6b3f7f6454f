// src/models/mod.rs

//! Domain models for the alert engine.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod alert;
mod bulletin;
mod config;
pub mod regions;

// Re-export all public types
pub use alert::{Alert, AlertDetails, AlertKind, Classification, EcColor, Sections, Severity};
pub use bulletin::{MsgType, ParsedBulletin, Reference};
pub use config::{Config, CrawlerConfig, FeedConfig};
pub use regions::Region;

/// Counters describing how a crawl went.
///
/// Lets callers distinguish "confirmed zero alerts" from "the crawl
/// itself failed".
#[derive(Debug, Default, Clone, Copy, serde::Serialize)]
pub struct CrawlStats {
    pub hours_scanned: usize,
    pub bulletins_fetched: usize,
    pub fetch_failures: usize,
    pub parse_failures: usize,
}
