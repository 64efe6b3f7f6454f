//! Pipeline entry points for alert operations.
//!
//! - `AlertService`: crawl one province's feed into the active alert list

pub mod fetch;

pub use fetch::AlertService;
