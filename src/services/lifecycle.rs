// src/services/lifecycle.rs

//! Lifecycle resolver service.
//!
//! Folds every bulletin parsed during one crawl into the final active
//! alert set: cancellations and supersessions are applied crawl-wide,
//! then the survivors are deduplicated in crawl order.

use std::collections::HashSet;

use crate::models::{Alert, ParsedBulletin};

/// Resolve the active alert set from all bulletins of one crawl.
///
/// `parsed` must be in crawl order: ascending hour directory, then
/// file-listing order within an hour. Deduplication keeps the first
/// occurrence of each id in that order.
pub fn resolve(parsed: Vec<ParsedBulletin>) -> Vec<Alert> {
    let mut dropped: HashSet<String> = HashSet::new();

    for bulletin in &parsed {
        // Explicitly cancelled ids.
        dropped.extend(bulletin.cancellations.iter().cloned());

        // Ids superseded by a later issuance's references.
        for alert in &bulletin.alerts {
            dropped.extend(alert.supersedes.iter().cloned());
        }
    }

    let mut seen = HashSet::new();
    let mut active = Vec::new();
    for alert in parsed.into_iter().flat_map(|b| b.alerts) {
        if dropped.contains(&alert.id) {
            continue;
        }
        if seen.insert(alert.id.clone()) {
            active.push(alert);
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MsgType;

    fn draft(id: &str, supersedes: &[&str]) -> Alert {
        Alert {
            id: id.to_string(),
            title: format!("Alert {id}"),
            description: String::new(),
            instruction: String::new(),
            headline: String::new(),
            details: Default::default(),
            details_url: String::new(),
            sent: None,
            expires: None,
            severity: crate::models::Severity::Moderate,
            alert_type: crate::models::AlertKind::Warning,
            ec_color: crate::models::EcColor::Yellow,
            provider: String::new(),
            urgency: String::new(),
            certainty: String::new(),
            event: String::new(),
            areas: Vec::new(),
            coverage: String::new(),
            msg_type: MsgType::Alert,
            supersedes: supersedes.iter().map(|s| s.to_string()).collect(),
            matched_area: None,
        }
    }

    fn bulletin_with(alerts: Vec<Alert>, cancellations: &[&str]) -> ParsedBulletin {
        ParsedBulletin {
            alerts,
            cancellations: cancellations.iter().map(|s| s.to_string()).collect(),
            msg_type: MsgType::Alert,
        }
    }

    #[test]
    fn test_cancel_removes_alert() {
        let parsed = vec![
            bulletin_with(vec![draft("A1", &[])], &[]),
            bulletin_with(vec![], &["A1"]),
        ];
        assert!(resolve(parsed).is_empty());
    }

    #[test]
    fn test_cancel_order_does_not_matter() {
        let parsed = vec![
            bulletin_with(vec![], &["A1"]),
            bulletin_with(vec![draft("A1", &[])], &[]),
        ];
        assert!(resolve(parsed).is_empty());
    }

    #[test]
    fn test_update_supersedes_original() {
        let parsed = vec![
            bulletin_with(vec![draft("A1", &[])], &[]),
            bulletin_with(vec![draft("A2", &["A1"])], &[]),
        ];
        let active = resolve(parsed);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "A2");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut later = draft("A1", &[]);
        later.title = "later copy".to_string();
        let parsed = vec![
            bulletin_with(vec![draft("A1", &[])], &[]),
            bulletin_with(vec![later], &[]),
        ];
        let active = resolve(parsed);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Alert A1");
    }

    #[test]
    fn test_cancel_of_unknown_id_is_harmless() {
        let parsed = vec![
            bulletin_with(vec![draft("A1", &[])], &[]),
            bulletin_with(vec![], &["never-issued"]),
        ];
        let active = resolve(parsed);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "A1");
    }

    #[test]
    fn test_crawl_order_is_preserved() {
        let parsed = vec![
            bulletin_with(vec![draft("A1", &[]), draft("A2", &[])], &[]),
            bulletin_with(vec![draft("A3", &[])], &[]),
        ];
        let ids: Vec<_> = resolve(parsed).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["A1", "A2", "A3"]);
    }
}
