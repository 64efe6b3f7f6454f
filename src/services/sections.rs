// src/services/sections.rs

//! Description sectionizer service.
//!
//! Splits an alert's human-authored description into What/When/Where/
//! Remarks/Summary fields. Best effort: malformed or missing headers
//! never error, they just leave sections empty.

use crate::models::Sections;

/// Section currently being accumulated while walking lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    What,
    When,
    Where,
    Remarks,
}

/// Headers that switch the active section. Matched case-insensitively,
/// either as a whole line or as a prefix with trailing content.
const HEADERS: &[(&str, Section)] = &[
    ("what:", Section::What),
    ("when:", Section::When),
    ("where:", Section::Where),
    ("remarks:", Section::Remarks),
];

const IN_EFFECT_FOR: &str = "in effect for:";

/// Known footer boilerplate, discarded regardless of the active section.
const BOILERPLATE: &[&str] = &[
    "please continue to monitor",
    "for more information",
];

/// Split a free-text alert description into structured sections.
pub fn sectionize(text: &str) -> Sections {
    let mut sections = Sections::default();
    let mut current = Section::Summary;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_boilerplate(line) {
            continue;
        }

        // "In effect for:" writes straight to its own field and parks
        // subsequent unlabelled lines in remarks.
        if let Some(rest) = strip_header(line, IN_EFFECT_FOR) {
            if !rest.is_empty() {
                push_line(&mut sections.in_effect_for, rest);
            }
            current = Section::Remarks;
            continue;
        }

        if let Some((section, rest)) = match_header(line) {
            current = section;
            if !rest.is_empty() {
                push_line(section_field(&mut sections, current), rest);
            }
            continue;
        }

        push_line(section_field(&mut sections, current), line);
    }

    sections
}

fn match_header(line: &str) -> Option<(Section, &str)> {
    for (header, section) in HEADERS {
        if let Some(rest) = strip_header(line, header) {
            return Some((*section, rest));
        }
    }
    None
}

/// Strip a case-insensitive header prefix, returning the trimmed trailing
/// content on the same line. Headers are ASCII, so the byte-length check
/// is safe on any input.
fn strip_header<'a>(line: &'a str, header: &str) -> Option<&'a str> {
    let prefix = line.get(..header.len())?;
    if prefix.eq_ignore_ascii_case(header) {
        Some(line[header.len()..].trim())
    } else {
        None
    }
}

fn section_field(sections: &mut Sections, section: Section) -> &mut String {
    match section {
        Section::Summary => &mut sections.summary,
        Section::What => &mut sections.what,
        Section::When => &mut sections.when,
        Section::Where => &mut sections.where_,
        Section::Remarks => &mut sections.remarks,
    }
}

fn push_line(field: &mut String, line: &str) {
    if !field.is_empty() {
        field.push('\n');
    }
    field.push_str(line);
}

fn is_boilerplate(line: &str) -> bool {
    if line == "###" {
        return true;
    }
    let lower = line.to_lowercase();
    if BOILERPLATE.iter().any(|phrase| lower.contains(phrase)) {
        return true;
    }
    // Hashtag lines ("#BCStorm") and contact email lines.
    line.split_whitespace().any(|word| {
        word.len() > 1 && (word.starts_with('#') || is_email_like(word))
    })
}

fn is_email_like(word: &str) -> bool {
    match word.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_headers_on_own_lines() {
        let s = sectionize("What:\nHeavy snow\nWhen:\nTonight\nWhere:\nCity X");
        assert_eq!(s.what, "Heavy snow");
        assert_eq!(s.when, "Tonight");
        assert_eq!(s.where_, "City X");
        assert_eq!(s.summary, "");
        assert_eq!(s.remarks, "");
    }

    #[test]
    fn test_inline_header_content() {
        let s = sectionize("What: Snowfall of 20 to 30 cm.\nWhere: Coquihalla Highway.");
        assert_eq!(s.what, "Snowfall of 20 to 30 cm.");
        assert_eq!(s.where_, "Coquihalla Highway.");
    }

    #[test]
    fn test_leading_lines_are_summary() {
        let s = sectionize("A strong front is approaching.\nSnow expected.\nWhat:\nSnow");
        assert_eq!(s.summary, "A strong front is approaching.\nSnow expected.");
        assert_eq!(s.what, "Snow");
    }

    #[test]
    fn test_multi_line_sections_join_with_newline() {
        let s = sectionize("Remarks:\nFirst remark.\nSecond remark.");
        assert_eq!(s.remarks, "First remark.\nSecond remark.");
    }

    #[test]
    fn test_in_effect_for_special_case() {
        let s = sectionize("In effect for: next 24 hours\nRoads may be icy.");
        assert_eq!(s.in_effect_for, "next 24 hours");
        // Lines after "In effect for:" default into remarks.
        assert_eq!(s.remarks, "Roads may be icy.");
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let s = sectionize("WHAT: wind\nwHeRe: the coast");
        assert_eq!(s.what, "wind");
        assert_eq!(s.where_, "the coast");
    }

    #[test]
    fn test_boilerplate_is_discarded() {
        let s = sectionize(
            "What: Freezing rain.\n\
             Please continue to monitor alerts and forecasts.\n\
             For more information visit our site.\n\
             #ONStorm\n\
             report it by email to storm@ec.gc.ca\n\
             ###\n\
             Ice buildup likely.",
        );
        assert_eq!(s.what, "Freezing rain.\nIce buildup likely.");
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(sectionize(""), Sections::default());
        assert_eq!(sectionize("  \n\n  \n"), Sections::default());
    }

    #[test]
    fn test_never_panics_on_odd_input() {
        let s = sectionize("What:\nWhat:\nwhere:here\nRemarks:");
        assert_eq!(s.where_, "here");
        assert_eq!(s.remarks, "");
    }
}
