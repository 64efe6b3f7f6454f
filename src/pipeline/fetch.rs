// src/pipeline/fetch.rs

//! Alert fetching pipeline.
//!
//! The facade the UI layer calls: one invocation crawls the user's
//! province's office for the current UTC date and returns the final
//! deduplicated, classified, location-filtered alert list.

use std::sync::Arc;

use chrono::Utc;

use crate::error::Result;
use crate::models::regions::office_for_province;
use crate::models::{Alert, Config, CrawlStats};
use crate::services::{geo, lifecycle, FeedCrawler};

/// Facade over the whole crawl/parse/resolve/filter pipeline.
pub struct AlertService {
    crawler: FeedCrawler,
}

impl AlertService {
    /// Create an alert service with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        Ok(Self {
            crawler: FeedCrawler::new(config)?,
        })
    }

    /// Fetch the active alerts for a province, filtered to a location.
    ///
    /// Never fails: every per-unit error is logged and absorbed, and an
    /// unmapped province or a fully failed crawl both yield an empty
    /// list. `lat`/`lon` are accepted for interface compatibility with
    /// the UI's location model; the text-heuristic matcher only uses
    /// `location_name`.
    pub async fn fetch_alerts(
        &self,
        province_code: &str,
        lat: f64,
        lon: f64,
        location_name: &str,
    ) -> Vec<Alert> {
        self.fetch_alerts_with_stats(province_code, lat, lon, location_name)
            .await
            .0
    }

    /// Like [`fetch_alerts`](Self::fetch_alerts), but also returns crawl
    /// counters so callers can tell "confirmed zero alerts" apart from
    /// "the crawl itself failed".
    pub async fn fetch_alerts_with_stats(
        &self,
        province_code: &str,
        _lat: f64,
        _lon: f64,
        location_name: &str,
    ) -> (Vec<Alert>, CrawlStats) {
        let mut stats = CrawlStats::default();

        let Some(office) = office_for_province(province_code) else {
            log::warn!("No forecast office mapped for province {province_code:?}");
            return (Vec::new(), stats);
        };

        let date = Utc::now().format("%Y%m%d").to_string();
        log::info!("Crawling alerts for {province_code} ({office}) on {date}");

        let parsed = match self.crawler.crawl(&date, office).await {
            Ok((parsed, crawl_stats)) => {
                stats = crawl_stats;
                parsed
            }
            Err(error) => {
                stats.fetch_failures += 1;
                log::warn!("Crawl failed for {date}/{office}: {error}");
                return (Vec::new(), stats);
            }
        };

        let active = lifecycle::resolve(parsed);
        let alerts = filter_by_location(active, location_name);

        log::info!(
            "Crawl done: {} active alerts ({} bulletins, {} fetch / {} parse failures)",
            alerts.len(),
            stats.bulletins_fetched,
            stats.fetch_failures,
            stats.parse_failures
        );

        (alerts, stats)
    }
}

/// Keep alerts matching the location and record which area matched.
///
/// An empty location name keeps everything, unfiltered.
fn filter_by_location(alerts: Vec<Alert>, location_name: &str) -> Vec<Alert> {
    if location_name.trim().is_empty() {
        return alerts;
    }

    alerts
        .into_iter()
        .filter_map(|mut alert| {
            let m = geo::matches(&alert, location_name);
            if m.matched {
                alert.matched_area = m.matched_area;
                Some(alert)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertKind, EcColor, MsgType, Severity};

    fn alert(id: &str, areas: &[&str]) -> Alert {
        Alert {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            instruction: String::new(),
            headline: String::new(),
            details: Default::default(),
            details_url: String::new(),
            sent: None,
            expires: None,
            severity: Severity::Moderate,
            alert_type: AlertKind::Warning,
            ec_color: EcColor::Yellow,
            provider: String::new(),
            urgency: String::new(),
            certainty: String::new(),
            event: String::new(),
            areas: areas.iter().map(|s| s.to_string()).collect(),
            coverage: String::new(),
            msg_type: MsgType::Alert,
            supersedes: Vec::new(),
            matched_area: None,
        }
    }

    #[test]
    fn test_filter_sets_matched_area() {
        let alerts = vec![
            alert("match", &["Metro Vancouver"]),
            alert("miss", &["Okanagan"]),
            alert("province-wide", &[]),
        ];
        let filtered = filter_by_location(alerts, "Vancouver");
        let ids: Vec<_> = filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["match", "province-wide"]);
        assert_eq!(filtered[0].matched_area.as_deref(), Some("Metro Vancouver"));
        assert_eq!(filtered[1].matched_area, None);
    }

    #[test]
    fn test_empty_location_keeps_all() {
        let alerts = vec![alert("a", &["Okanagan"]), alert("b", &[])];
        assert_eq!(filter_by_location(alerts, "  ").len(), 2);
    }

    #[test]
    fn test_parsed_cancel_empties_active_set() {
        use crate::services::{cap, lifecycle};
        use chrono::TimeZone;

        let now = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let issue = r#"<alert xmlns="urn:oasis:names:tc:emergency:cap:1.2">
<identifier>A1</identifier><msgType>Alert</msgType>
<info><language>en-CA</language><event>wind</event>
<expires>2024-01-16T00:00:00-00:00</expires></info></alert>"#;
        let cancel = r#"<alert xmlns="urn:oasis:names:tc:emergency:cap:1.2">
<identifier>C1</identifier><msgType>Cancel</msgType>
<references>s,A1,t</references></alert>"#;

        let parsed = vec![
            cap::parse_at(issue, "en-CA", now).unwrap(),
            cap::parse_at(cancel, "en-CA", now).unwrap(),
        ];
        let active = lifecycle::resolve(parsed);
        assert!(filter_by_location(active, "Prince Rupert").is_empty());
    }

    #[test]
    fn test_cancel_of_unseen_id_yields_empty_without_error() {
        use crate::services::{cap, lifecycle};

        let cancel = r#"<alert xmlns="urn:oasis:names:tc:emergency:cap:1.2">
<identifier>C1</identifier><msgType>Cancel</msgType>
<references>s,never-issued,t</references></alert>"#;
        let parsed = vec![cap::parse(cancel, "en-CA").unwrap()];
        assert!(lifecycle::resolve(parsed).is_empty());
    }

    #[tokio::test]
    async fn test_unknown_province_returns_empty_without_network() {
        let service = AlertService::new(Arc::new(Config::default())).unwrap();
        let (alerts, stats) = service.fetch_alerts_with_stats("XX", 0.0, 0.0, "").await;
        assert!(alerts.is_empty());
        assert_eq!(stats.bulletins_fetched, 0);
        assert_eq!(stats.hours_scanned, 0);
    }
}
