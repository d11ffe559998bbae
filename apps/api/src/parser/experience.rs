//! Experience-entry segmentation.
//!
//! A line carrying a date-range signature is treated as the position line and
//! the line right above it as the company. This assumes company-then-title
//! ordering; resumes formatted the other way around will misparse, which is a
//! known limitation of the heuristic rather than something this parser tries
//! to disambiguate.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::Experience;
use crate::parser::dates::{
    has_date_signature, parse_date_range, starts_new_dated_entry, strip_date_suffix,
};

lazy_static! {
    static ref BULLET_MARKER: Regex =
        Regex::new(r"^[\u{2022}\u{25CF}\u{25C6}\u{25A0}\u{25AA}\u{25B8}\u{25BA}\u{2219}\u{29BF}\u{29BE}*-]\s*")
            .unwrap();
    static ref SECTION_STOP: Regex =
        Regex::new(r"(?i)^(PROJECTS|EDUCATION|AWARDS|CERTIFICATIONS)").unwrap();
}

/// Minimum length for an unmarked line to count as a bullet; shorter stray
/// fragments are dropped.
const MIN_BULLET_LEN: usize = 10;

fn strip_bullet_marker(line: &str) -> String {
    BULLET_MARKER.replace(line, "").to_string()
}

/// Parses the experience section text into dated entries with bullet lists.
/// Entry ids are sequential ("exp1", "exp2", ...) and unique within a resume.
pub fn extract_experience(section_text: &str) -> Vec<Experience> {
    let lines: Vec<&str> = section_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut experiences = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if !has_date_signature(line) {
            i += 1;
            continue;
        }

        // Date-bearing line: position here, company on the previous line.
        let company = if i > 0 {
            strip_bullet_marker(lines[i - 1])
        } else {
            "Company".to_string()
        };
        let position = strip_date_suffix(line);
        let dates = parse_date_range(line);

        let mut bullets = Vec::new();
        let mut j = i + 1;
        while j < lines.len() {
            let next = lines[j];
            if starts_new_dated_entry(next) {
                break;
            }
            if SECTION_STOP.is_match(next) {
                j += 1;
                break;
            }
            if BULLET_MARKER.is_match(next) {
                bullets.push(strip_bullet_marker(next));
            } else if next.len() > MIN_BULLET_LEN {
                bullets.push(next.to_string());
            }
            j += 1;
        }

        if !bullets.is_empty() || position.len() > 5 {
            experiences.push(Experience {
                id: format!("exp{}", experiences.len() + 1),
                company,
                position,
                start_date: dates.start,
                end_date: dates.end,
                location: None,
                bullets,
                is_improved: None,
            });
        }
        i = j;
    }

    experiences
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECTION: &str = "Acme Corp\nSenior Engineer Jan 2020 - Present\n\u{2022} Led a team of 5 increasing revenue by 30%\n\u{2022} Shipped the billing rewrite\nInitech\nSoftware Engineer Mar 2017 - Dec 2019\nMaintained legacy reporting pipeline";

    #[test]
    fn test_two_entries_with_bullets() {
        let entries = extract_experience(SECTION);
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.id, "exp1");
        assert_eq!(first.company, "Acme Corp");
        assert_eq!(first.position, "Senior Engineer");
        assert_eq!(first.start_date, "2020-01");
        assert_eq!(first.end_date, "Present");
        assert_eq!(
            first.bullets,
            vec![
                "Led a team of 5 increasing revenue by 30%".to_string(),
                "Shipped the billing rewrite".to_string(),
            ]
        );

        let second = &entries[1];
        assert_eq!(second.id, "exp2");
        assert_eq!(second.company, "Initech");
        assert_eq!(second.position, "Software Engineer");
        assert_eq!(second.start_date, "2017-03");
        assert_eq!(second.end_date, "2019-12");
        assert_eq!(second.bullets, vec!["Maintained legacy reporting pipeline"]);
    }

    #[test]
    fn test_unmarked_long_lines_become_bullets_short_ones_do_not() {
        let section = "Acme Corp\nEngineer Jan 2020 - Present\nBuilt the data export service\nNYC";
        let entries = extract_experience(section);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].bullets, vec!["Built the data export service"]);
    }

    #[test]
    fn test_date_line_first_gets_placeholder_company() {
        let section = "Engineer Jan 2020 - Present\nBuilt internal tooling for deployments";
        let entries = extract_experience(section);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Company");
    }

    #[test]
    fn test_empty_section_yields_no_entries() {
        assert!(extract_experience("").is_empty());
    }

    #[test]
    fn test_section_without_dates_yields_no_entries() {
        assert!(extract_experience("Worked at several companies\nDid many things").is_empty());
    }

    #[test]
    fn test_short_position_without_bullets_is_dropped() {
        // Stray date fragment with a too-short title and nothing under it.
        let entries = extract_experience("X\n2019-");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_bullet_markers_are_stripped() {
        let section = "Acme Corp\nEngineer Jan 2020 - Present\n- Reduced costs by 20%\n* Automated the release process";
        let entries = extract_experience(section);
        assert_eq!(
            entries[0].bullets,
            vec!["Reduced costs by 20%", "Automated the release process"]
        );
    }
}
