//! Alert data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Traffic-light colour assigned to an alert by Environment Canada convention.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EcColor {
    Red,
    Orange,
    Yellow,
    Grey,
}

/// Alert severity bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Severe,
    Moderate,
    Minor,
}

/// Kind of alert, derived from the bulletin's type/name strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Watch,
    Advisory,
    Statement,
}

/// Result of classifying an alert's type/name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub color: EcColor,
    pub severity: Severity,
    pub kind: AlertKind,
}

/// Structured sections extracted from an alert's free-text description.
///
/// Each field is a newline-joined string and may be empty when the
/// description carries no such section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sections {
    pub summary: String,
    pub what: String,
    pub when: String,
    #[serde(rename = "where")]
    pub where_: String,
    pub remarks: String,
    #[serde(rename = "additionalInfo")]
    pub additional_info: String,
    #[serde(rename = "inEffectFor")]
    pub in_effect_for: String,
}

/// Detail sub-record shown on an alert's expanded view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertDetails {
    /// Human-readable issuance time
    pub issued_time: String,

    /// Impact level wording (derived from severity)
    pub impact_level: String,

    /// Forecast confidence wording (derived from certainty)
    pub forecast_confidence: String,

    #[serde(flatten)]
    pub sections: Sections,
}

/// A parsed, user-facing weather alert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// CAP bulletin identifier (globally unique per issuance)
    pub id: String,

    /// Display title (the alert name)
    pub title: String,

    /// Full free-text description
    pub description: String,

    /// Recommended action text
    pub instruction: String,

    /// One-line headline
    pub headline: String,

    /// Structured detail fields
    pub details: AlertDetails,

    /// Link to the issuer's detail page
    pub details_url: String,

    /// Issuance timestamp
    pub sent: Option<DateTime<Utc>>,

    /// Expiry timestamp
    pub expires: Option<DateTime<Utc>>,

    pub severity: Severity,

    /// Kind of alert (warning/watch/advisory/statement)
    pub alert_type: AlertKind,

    pub ec_color: EcColor,

    /// Issuing authority
    pub provider: String,

    pub urgency: String,
    pub certainty: String,
    pub event: String,

    /// Free-text area descriptions this alert applies to
    pub areas: Vec<String>,

    /// Coverage display text (joined areas or the Alert_Coverage parameter)
    pub coverage: String,

    pub msg_type: crate::models::MsgType,

    /// Identifiers of bulletins this alert's bulletin referenced
    pub supersedes: Vec<String>,

    /// Area text that matched the user's location, set by geographic filtering
    pub matched_area: Option<String>,
}

impl Alert {
    /// Format an alert for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{title}`, `{headline}`, `{coverage}`, `{event}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id)
            .replace("{title}", &self.title)
            .replace("{headline}", &self.headline)
            .replace("{coverage}", &self.coverage)
            .replace("{event}", &self.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MsgType;

    fn sample_alert() -> Alert {
        Alert {
            id: "urn:oid:2.49.0.1.124.1".to_string(),
            title: "Snowfall Warning".to_string(),
            description: String::new(),
            instruction: String::new(),
            headline: "Snowfall warning in effect".to_string(),
            details: AlertDetails::default(),
            details_url: "https://weather.gc.ca/warnings/index_e.html".to_string(),
            sent: None,
            expires: None,
            severity: Severity::Moderate,
            alert_type: AlertKind::Warning,
            ec_color: EcColor::Yellow,
            provider: "Environment Canada".to_string(),
            urgency: "Expected".to_string(),
            certainty: "Likely".to_string(),
            event: "snowfall".to_string(),
            areas: vec!["Metro Vancouver".to_string()],
            coverage: "Metro Vancouver".to_string(),
            msg_type: MsgType::Alert,
            supersedes: Vec::new(),
            matched_area: None,
        }
    }

    #[test]
    fn test_format() {
        let alert = sample_alert();
        let result = alert.format("[{coverage}] {title}");
        assert_eq!(result, "[Metro Vancouver] Snowfall Warning");
    }

    #[test]
    fn test_serializes_camel_case() {
        let alert = sample_alert();
        let json = serde_json::to_value(&alert).unwrap();
        assert!(json.get("ecColor").is_some());
        assert!(json.get("detailsUrl").is_some());
        assert!(json.get("matchedArea").is_some());
        assert_eq!(json["ecColor"], "yellow");
    }
}
