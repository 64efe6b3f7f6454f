// src/services/geo.rs

//! Geographic matcher service.
//!
//! Filters alerts against a user's location name using the curated
//! region-to-keyword table. This is intentionally a text heuristic, not
//! a geofence: false positives and negatives are an accepted trade-off,
//! and the interface leaves room to swap in polygon testing later.

use crate::models::regions::{COASTAL_KEYWORDS, INLAND_KEYWORDS, REGION_TABLE};
use crate::models::Alert;

/// Result of matching one alert against a location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoMatch {
    pub matched: bool,
    /// The alert area text that matched, when a specific one did.
    pub matched_area: Option<String>,
}

impl GeoMatch {
    fn unconditional() -> Self {
        Self {
            matched: true,
            matched_area: None,
        }
    }

    fn area(area: &str) -> Self {
        Self {
            matched: true,
            matched_area: Some(area.to_string()),
        }
    }

    fn none() -> Self {
        Self::default()
    }
}

/// Match an alert's area texts against a location name.
///
/// Alerts with no areas are treated as province-wide and always match,
/// as does an empty location name (nothing to filter by). Areas are
/// tried in order; the first match wins.
pub fn matches(alert: &Alert, location_name: &str) -> GeoMatch {
    if alert.areas.is_empty() {
        return GeoMatch::unconditional();
    }

    let location = location_name.trim().to_lowercase();
    if location.is_empty() {
        return GeoMatch::unconditional();
    }

    for area in &alert.areas {
        let area_lower = area.to_lowercase();

        // Direct hit: the location name appears in the area text.
        if area_lower.contains(&location) {
            return GeoMatch::area(area);
        }

        // Coastal/inland-qualified areas only match their dedicated
        // keyword list; a miss rejects the area outright with no
        // fall-through to the region table.
        let coastal = area_lower.contains("coastal");
        let inland = area_lower.contains("inland");
        if coastal || inland {
            let hit = (coastal && contains_any(&location, COASTAL_KEYWORDS))
                || (inland && contains_any(&location, INLAND_KEYWORDS));
            if hit {
                return GeoMatch::area(area);
            }
            continue;
        }

        // General case: the area names a region whose keyword list
        // covers the location.
        for region in REGION_TABLE {
            if area_lower.contains(region.name) && contains_any(&location, region.keywords) {
                return GeoMatch::area(area);
            }
        }
    }

    GeoMatch::none()
}

fn contains_any(location: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| location.contains(kw))
}
