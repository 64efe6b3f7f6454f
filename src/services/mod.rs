// src/services/mod.rs

//! Engine services, one module per pipeline stage.
//!
//! - `feed`: directory-listing discovery and bulletin download
//! - `cap`: CAP XML parsing with lifecycle signals
//! - `sections`: free-text description sectionizing
//! - `classify`: severity/colour classification
//! - `lifecycle`: crawl-wide cancellation and dedup
//! - `geo`: location keyword matching

pub mod cap;
pub mod classify;
pub mod feed;
pub mod geo;
pub mod lifecycle;
pub mod sections;

pub use feed::FeedCrawler;
pub use geo::GeoMatch;
