// src/services/feed.rs

//! Feed crawler service.
//!
//! Discovers and fetches CAP bulletins from the `{base}/{date}/{office}/{hour}/`
//! HTTP directory hierarchy. There is no machine-readable index: hour
//! directories and `.cap` files are scraped out of HTML anchor tags.

use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use regex::Regex;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Config, CrawlStats, ParsedBulletin};
use crate::services::cap;
use crate::utils::{self, http};

/// Matches a two-digit hour directory anchor ("04" or "04/").
fn hour_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{2})/?$").expect("valid hour pattern"))
}

/// Service for crawling CAP bulletins for one (date, office) pair.
pub struct FeedCrawler {
    config: Arc<Config>,
    client: Client,
}

impl FeedCrawler {
    /// Create a new feed crawler with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = http::create_async_client(&config.crawler)?;
        Ok(Self { config, client })
    }

    /// List the hour subdirectories published for a (date, office) pair,
    /// sorted ascending.
    ///
    /// A 404 on the office directory means no alerts have been issued
    /// today and yields an empty list, not an error.
    pub async fn list_hours(&self, date: &str, office: &str) -> Result<Vec<String>> {
        let url = utils::join_segments(self.base_url(), &[date, office], true)?;
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let html = response.error_for_status()?.text().await?;

        let mut hours: Vec<String> = anchor_targets(&html)
            .into_iter()
            .filter_map(|target| {
                hour_pattern()
                    .captures(&target)
                    .map(|caps| caps[1].to_string())
            })
            .collect();
        hours.sort();
        hours.dedup();
        Ok(hours)
    }

    /// List the `.cap` bulletin files in one hour directory, in listing order.
    pub async fn list_files(&self, date: &str, office: &str, hour: &str) -> Result<Vec<String>> {
        let url = utils::join_segments(self.base_url(), &[date, office, hour], true)?;
        let html = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(anchor_targets(&html)
            .into_iter()
            .filter(|target| target.ends_with(".cap"))
            .collect())
    }

    /// Download the raw XML for one discovered bulletin file.
    pub async fn fetch_bulletin(
        &self,
        date: &str,
        office: &str,
        hour: &str,
        filename: &str,
    ) -> Result<String> {
        let url =
            utils::join_segments(self.base_url(), &[date, office, hour, filename], false)?;
        let text = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(text)
    }

    /// Fetch one bulletin with a small bounded retry for transient failures.
    async fn fetch_bulletin_with_retry(
        &self,
        date: &str,
        office: &str,
        hour: &str,
        filename: &str,
    ) -> Result<String> {
        let retries = self.config.crawler.max_retries;
        let mut attempt = 0;
        loop {
            match self.fetch_bulletin(date, office, hour, filename).await {
                Ok(xml) => return Ok(xml),
                Err(error) if attempt < retries => {
                    attempt += 1;
                    log::debug!(
                        "Retrying bulletin {hour}/{filename} (attempt {attempt}): {error}"
                    );
                    tokio::time::sleep(Duration::from_millis(500 * attempt as u64)).await;
                }
                Err(error) => {
                    return Err(AppError::crawl(format!("{date}/{office}/{hour}/{filename}"), error))
                }
            }
        }
    }

    /// Crawl every bulletin for a (date, office) pair.
    ///
    /// Scans only the most recent `hour_window` hour directories, fetches
    /// every `.cap` file in them (a missed Cancel would re-surface a stale
    /// alert), and parses each bulletin. Per-unit fetch and parse failures
    /// are logged and skipped so one bad bulletin never aborts the crawl.
    ///
    /// Bulletins are processed hour by ascending hour, files in listing
    /// order, so the result vector is in deterministic crawl order even
    /// though fetches within an hour run concurrently.
    pub async fn crawl(&self, date: &str, office: &str) -> Result<(Vec<ParsedBulletin>, CrawlStats)> {
        let delay = Duration::from_millis(self.config.crawler.request_delay_ms);
        let concurrency = self.config.crawler.max_concurrent.max(1);
        let language = &self.config.feed.language;

        let mut stats = CrawlStats::default();
        let mut parsed = Vec::new();

        let all_hours = self.list_hours(date, office).await?;
        let window = self.config.feed.hour_window;
        let recent: Vec<&String> = all_hours.iter().rev().take(window).rev().collect();
        stats.hours_scanned = recent.len();

        for hour in recent {
            let files = match self.list_files(date, office, hour).await {
                Ok(files) => files,
                Err(error) => {
                    stats.fetch_failures += 1;
                    log::warn!("Failed to list hour {date}/{office}/{hour}: {error}");
                    continue;
                }
            };

            // `buffered` keeps listing order, unlike buffer_unordered, so
            // lifecycle dedup sees a deterministic crawl order.
            let mut bulletin_stream = stream::iter(files)
                .map(|filename| async move {
                    let result = self
                        .fetch_bulletin_with_retry(date, office, hour, &filename)
                        .await;
                    (filename, result)
                })
                .buffered(concurrency);

            while let Some((filename, result)) = bulletin_stream.next().await {
                match result {
                    Ok(xml) => {
                        stats.bulletins_fetched += 1;
                        match cap::parse(&xml, language) {
                            Ok(bulletin) => parsed.push(bulletin),
                            Err(error) => {
                                stats.parse_failures += 1;
                                log::warn!("Failed to parse bulletin {hour}/{filename}: {error}");
                            }
                        }
                    }
                    Err(error) => {
                        stats.fetch_failures += 1;
                        log::warn!("Failed to fetch bulletin {hour}/{filename}: {error}");
                    }
                }

                // Courtesy pacing toward the upstream server.
                if delay.as_millis() > 0 {
                    tokio::time::sleep(delay).await;
                }
            }
        }

        Ok((parsed, stats))
    }

    fn base_url(&self) -> &str {
        self.config.feed.base_url.trim_end_matches('/')
    }
}

/// Extract anchor targets from a directory-listing page.
///
/// Prefers the href attribute; falls back to the anchor's text, which
/// some listing servers render without an href.
fn anchor_targets(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse("a").expect("valid anchor selector");

    document
        .select(&anchor_sel)
        .filter_map(|anchor| {
            anchor
                .value()
                .attr("href")
                .map(str::to_string)
                .or_else(|| {
                    let text: String = anchor.text().collect();
                    let text = text.trim().to_string();
                    (!text.is_empty()).then_some(text)
                })
        })
        .collect()
}
