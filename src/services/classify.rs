// src/services/classify.rs

//! Alert classifier service.
//!
//! Maps a bulletin's type/name strings to a {color, severity, kind}
//! triple. Pure and total: every input classifies to something.

use crate::models::{AlertKind, Classification, EcColor, Severity};

/// Events that are always treated as severe, whatever the name says.
const SEVERE_EVENTS: &[&str] = &[
    "tornado",
    "severe thunderstorm",
    "blizzard",
    "ice storm",
    "hurricane",
];

/// Classify an alert from its `Alert_Type` and `Alert_Name` parameters.
///
/// The rules form a priority cascade; the first matching rule wins.
pub fn classify(alert_type: &str, alert_name: &str) -> Classification {
    let name = alert_name.to_lowercase();
    let combined = format!("{} {}", alert_type.to_lowercase(), name);

    // Rule 1: an explicit colour word standing alone in the alert name.
    if let Some(classification) = classify_by_color_token(&name, &combined) {
        return classification;
    }

    // Rule 2: events that are severe regardless of wording.
    if SEVERE_EVENTS.iter().any(|event| combined.contains(event)) {
        return Classification {
            color: EcColor::Red,
            severity: Severity::Severe,
            kind: AlertKind::Warning,
        };
    }

    // Rules 3-6: kind keywords, strongest first.
    if combined.contains("warning") {
        Classification {
            color: EcColor::Yellow,
            severity: Severity::Moderate,
            kind: AlertKind::Warning,
        }
    } else if combined.contains("watch") {
        Classification {
            color: EcColor::Yellow,
            severity: Severity::Moderate,
            kind: AlertKind::Watch,
        }
    } else if combined.contains("advisory") {
        Classification {
            color: EcColor::Orange,
            severity: Severity::Moderate,
            kind: AlertKind::Advisory,
        }
    } else {
        // "statement" and anything unrecognized.
        Classification {
            color: EcColor::Grey,
            severity: Severity::Minor,
            kind: AlertKind::Statement,
        }
    }
}

/// Rule 1: colour words must appear as standalone tokens in the name,
/// so "red deer wind warning" still counts as red but "flurred" would not.
fn classify_by_color_token(name: &str, combined: &str) -> Option<Classification> {
    let has_token = |color: &str| {
        name.split(|c: char| !c.is_alphanumeric())
            .any(|token| token == color)
    };

    if has_token("red") {
        return Some(Classification {
            color: EcColor::Red,
            severity: Severity::Severe,
            kind: AlertKind::Warning,
        });
    }
    if has_token("yellow") {
        let kind = if combined.contains("advisory") {
            AlertKind::Advisory
        } else if combined.contains("watch") {
            AlertKind::Watch
        } else {
            AlertKind::Warning
        };
        return Some(Classification {
            color: EcColor::Yellow,
            severity: Severity::Moderate,
            kind,
        });
    }
    if has_token("orange") {
        return Some(Classification {
            color: EcColor::Orange,
            severity: Severity::Moderate,
            kind: AlertKind::Advisory,
        });
    }
    if has_token("grey") || has_token("gray") {
        return Some(Classification {
            color: EcColor::Grey,
            severity: Severity::Minor,
            kind: AlertKind::Statement,
        });
    }
    None
}
