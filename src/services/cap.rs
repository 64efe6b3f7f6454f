// src/services/cap.rs

//! CAP bulletin parser service.
//!
//! Parses one Common Alerting Protocol XML document into alert drafts
//! plus lifecycle signals. Drafts are not yet lifecycle-resolved or
//! geo-filtered; that happens once per crawl over all bulletins.

use chrono::{DateTime, Utc};
use roxmltree::{Document, Node};

use crate::error::Result;
use crate::models::{Alert, AlertDetails, MsgType, ParsedBulletin, Reference, Severity};
use crate::services::{classify, sections};

/// Fallback detail page when a bulletin carries no `web` element.
const DEFAULT_DETAILS_URL: &str = "https://weather.gc.ca/warnings/index_e.html";

/// Parse a raw CAP XML bulletin, keeping info blocks in `language`.
pub fn parse(raw_xml: &str, language: &str) -> Result<ParsedBulletin> {
    parse_at(raw_xml, language, Utc::now())
}

/// Parse with an explicit "now" for the expiry check.
pub fn parse_at(raw_xml: &str, language: &str, now: DateTime<Utc>) -> Result<ParsedBulletin> {
    let doc = Document::parse(raw_xml)?;
    let root = doc.root_element();

    let identifier = child_text(root, "identifier").unwrap_or_default();
    let sender = child_text(root, "sender").unwrap_or_default();
    let sent = parse_time(child_text(root, "sent").as_deref());
    let msg_type = MsgType::parse(child_text(root, "msgType").as_deref());

    let references = Reference::parse_list(&child_text(root, "references").unwrap_or_default());
    let ref_ids = Reference::identifiers(&references);

    // A Cancel bulletin carries no alert content of its own; its whole
    // meaning is the list of identifiers it withdraws.
    if msg_type == MsgType::Cancel {
        return Ok(ParsedBulletin {
            alerts: Vec::new(),
            cancellations: ref_ids,
            msg_type,
        });
    }

    let mut alerts = Vec::new();

    for info in children(root, "info") {
        // Only the target locale's info blocks are kept; a missing
        // language element is accepted as-is.
        if let Some(lang) = child_text(info, "language") {
            if !lang.eq_ignore_ascii_case(language) {
                continue;
            }
        }

        // An AllClear response stands down the referenced alerts; with
        // no references it stands down this bulletin's own identifier.
        // The asymmetry with Cancel is upstream behavior, kept as-is.
        let response_type = child_text(info, "responseType").unwrap_or_default();
        if response_type.eq_ignore_ascii_case("allclear") {
            let cancellations = if ref_ids.is_empty() {
                vec![identifier]
            } else {
                ref_ids
            };
            return Ok(ParsedBulletin {
                alerts: Vec::new(),
                cancellations,
                msg_type,
            });
        }

        let expires = parse_time(child_text(info, "expires").as_deref());
        if let Some(expiry) = expires {
            if expiry < now {
                continue;
            }
        }

        alerts.push(build_alert(info, &identifier, &sender, sent, expires, msg_type, &ref_ids));
    }

    Ok(ParsedBulletin {
        alerts,
        cancellations: Vec::new(),
        msg_type,
    })
}

/// Assemble one alert draft from a surviving info block.
fn build_alert(
    info: Node,
    identifier: &str,
    sender: &str,
    sent: Option<DateTime<Utc>>,
    expires: Option<DateTime<Utc>>,
    msg_type: MsgType,
    ref_ids: &[String],
) -> Alert {
    let (alert_type, alert_name, alert_coverage) = read_parameters(info);
    let classification = classify::classify(&alert_type, &alert_name);

    let description = child_text(info, "description").unwrap_or_default();
    let instruction = child_text(info, "instruction").unwrap_or_default();
    let headline = child_text(info, "headline").unwrap_or_default();
    let urgency = child_text(info, "urgency").unwrap_or_default();
    let certainty = child_text(info, "certainty").unwrap_or_default();
    let event = child_text(info, "event").unwrap_or_default();
    let details_url =
        child_text(info, "web").unwrap_or_else(|| DEFAULT_DETAILS_URL.to_string());

    let areas: Vec<String> = children(info, "area")
        .filter_map(|area| child_text(area, "areaDesc"))
        .collect();

    // Joined area texts are the display coverage; the Alert_Coverage
    // parameter is the fallback when the bulletin lists no areas.
    let coverage = if areas.is_empty() {
        alert_coverage
    } else {
        areas.join(", ")
    };

    let mut section_fields = sections::sectionize(&description);
    if section_fields.where_.is_empty() {
        section_fields.where_ = coverage.clone();
    }

    let issued_time = child_text(info, "effective")
        .or_else(|| sent.map(|t| t.to_rfc3339()))
        .unwrap_or_default();

    let details = AlertDetails {
        issued_time,
        impact_level: impact_level(classification.severity).to_string(),
        forecast_confidence: forecast_confidence(&certainty).to_string(),
        sections: section_fields,
    };

    Alert {
        id: identifier.to_string(),
        title: alert_name,
        description,
        instruction,
        headline,
        details,
        details_url,
        sent,
        expires,
        severity: classification.severity,
        alert_type: classification.kind,
        ec_color: classification.color,
        provider: sender.to_string(),
        urgency,
        certainty,
        event,
        areas,
        coverage,
        msg_type,
        supersedes: ref_ids.to_vec(),
        matched_area: None,
    }
}

/// Read the Alert_Type / Alert_Name / Alert_Coverage parameters.
///
/// Parameter names are matched by substring since issuers prefix them
/// with a profile path. Absent parameters get the documented defaults.
fn read_parameters(info: Node) -> (String, String, String) {
    let mut alert_type = "statement".to_string();
    let mut alert_name = "Unknown Alert".to_string();
    let mut alert_coverage = "Unknown Area".to_string();

    for parameter in children(info, "parameter") {
        let Some(value_name) = child_text(parameter, "valueName") else {
            continue;
        };
        let Some(value) = child_text(parameter, "value") else {
            continue;
        };
        if value_name.contains("Alert_Type") {
            alert_type = value;
        } else if value_name.contains("Alert_Name") {
            alert_name = value;
        } else if value_name.contains("Alert_Coverage") {
            alert_coverage = value;
        }
    }

    (alert_type, alert_name, alert_coverage)
}

/// Impact wording shown in the alert's detail record.
fn impact_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Severe => "High",
        Severity::Moderate => "Moderate",
        Severity::Minor => "Low",
    }
}

/// Confidence wording derived from the CAP certainty value.
fn forecast_confidence(certainty: &str) -> &'static str {
    match certainty.to_lowercase().as_str() {
        "observed" => "Certain",
        "likely" => "High",
        "possible" => "Moderate",
        "unlikely" => "Low",
        _ => "Unknown",
    }
}

/// First child element with the given local name, ignoring namespaces.
fn child<'a>(node: Node<'a, 'a>, tag: &str) -> Option<Node<'a, 'a>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

fn children<'a>(node: Node<'a, 'a>, tag: &'a str) -> impl Iterator<Item = Node<'a, 'a>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == tag)
}

fn child_text(node: Node, tag: &str) -> Option<String> {
    child(node, tag).and_then(|n| n.text()).map(|t| t.trim().to_string())
}

/// Parse a CAP timestamp (RFC 3339 with offset) into UTC.
fn parse_time(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v.trim()).ok())
        .map(|t| t.with_timezone(&Utc))
}
