//! CAP bulletin lifecycle types.

use serde::{Deserialize, Serialize};

use crate::models::Alert;

/// Lifecycle message type carried by a CAP bulletin.
///
/// Governs how a bulletin affects previously seen alerts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MsgType {
    /// New alert issuance
    #[default]
    Alert,

    /// Replaces the bulletins listed in `references`
    Update,

    /// Cancels the bulletins listed in `references`
    Cancel,

    /// All-clear; cancels referenced bulletins, or itself when none are listed
    #[serde(rename = "AllClear")]
    AllClear,
}

impl MsgType {
    /// Parse a CAP `msgType` value. Unknown or absent values default to `Alert`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("update") => Self::Update,
            Some(v) if v.eq_ignore_ascii_case("cancel") => Self::Cancel,
            Some(v) if v.eq_ignore_ascii_case("allclear") => Self::AllClear,
            _ => Self::Alert,
        }
    }
}

/// One entry of a bulletin's `references` element.
///
/// CAP encodes each reference as a `sender,identifier,sent` triple;
/// triples are separated by whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub sender: String,
    pub identifier: String,
    pub sent: String,
}

impl Reference {
    /// Parse a whitespace-separated list of `sender,identifier,sent` triples.
    ///
    /// Tokens missing an identifier field are dropped.
    pub fn parse_list(raw: &str) -> Vec<Reference> {
        raw.split_whitespace()
            .filter_map(|token| {
                let mut parts = token.splitn(3, ',');
                let sender = parts.next()?.to_string();
                let identifier = parts.next()?.trim().to_string();
                if identifier.is_empty() {
                    return None;
                }
                let sent = parts.next().unwrap_or("").to_string();
                Some(Reference {
                    sender,
                    identifier,
                    sent,
                })
            })
            .collect()
    }

    /// Extract just the referenced identifiers, in order.
    pub fn identifiers(refs: &[Reference]) -> Vec<String> {
        refs.iter().map(|r| r.identifier.clone()).collect()
    }
}

/// Result of parsing one CAP bulletin.
#[derive(Debug, Clone, Default)]
pub struct ParsedBulletin {
    /// Alert drafts extracted from the bulletin's info blocks
    pub alerts: Vec<Alert>,

    /// Identifiers this bulletin cancels
    pub cancellations: Vec<String>,

    /// The bulletin's lifecycle message type
    pub msg_type: MsgType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_type_parse() {
        assert_eq!(MsgType::parse(Some("Alert")), MsgType::Alert);
        assert_eq!(MsgType::parse(Some("update")), MsgType::Update);
        assert_eq!(MsgType::parse(Some("CANCEL")), MsgType::Cancel);
        assert_eq!(MsgType::parse(Some("AllClear")), MsgType::AllClear);
        assert_eq!(MsgType::parse(Some("something-else")), MsgType::Alert);
        assert_eq!(MsgType::parse(None), MsgType::Alert);
    }

    #[test]
    fn test_reference_parse_list() {
        let raw = "cap-pac@canada.ca,urn:oid:2.49.0.1.124.1,2024-01-01T12:00:00-00:00 \
                   cap-pac@canada.ca,urn:oid:2.49.0.1.124.2,2024-01-01T13:00:00-00:00";
        let refs = Reference::parse_list(raw);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].identifier, "urn:oid:2.49.0.1.124.1");
        assert_eq!(refs[1].identifier, "urn:oid:2.49.0.1.124.2");
        assert_eq!(
            Reference::identifiers(&refs),
            vec!["urn:oid:2.49.0.1.124.1", "urn:oid:2.49.0.1.124.2"]
        );
    }

    #[test]
    fn test_reference_parse_list_malformed() {
        // A bare sender with no identifier contributes nothing.
        let refs = Reference::parse_list("cap-pac@canada.ca");
        assert!(refs.is_empty());

        // Missing sent field is tolerated.
        let refs = Reference::parse_list("sender,id-only");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].identifier, "id-only");
        assert_eq!(refs[0].sent, "");
    }
}
