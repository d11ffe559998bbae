//! Education-entry extraction.
//!
//! Entries are grouped line-wise around degree-signature lines. The
//! institution is taken from the following non-date line when there is one,
//! else from the line just above the degree. A section that matches no degree
//! pattern still yields one placeholder entry, so a present-but-odd section
//! never disappears from the structured record.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::Education;
use crate::parser::dates::{has_date_signature, parse_date_range};

lazy_static! {
    static ref DEGREE: Regex =
        Regex::new(r"(?i)\bbachelor|\bmaster|\bphd|\bb\.s\.|\bm\.s\.|\bb\.a\.|\bm\.a\.|\bassociate")
            .unwrap();
    static ref FIELD_SUFFIX: Regex = Regex::new(r"(?i)\bin\s+(.+)$").unwrap();
    static ref GPA: Regex = Regex::new(r"(?i)\bgpa[:\s]*([0-4](?:\.\d{1,2})?)").unwrap();
}

const PLACEHOLDER_START: &str = "2015-09";
const PLACEHOLDER_END: &str = "2019-05";

fn field_of_study(degree_line: &str) -> String {
    FIELD_SUFFIX
        .captures(degree_line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| "Field of Study".to_string())
}

/// Parses the education section text. Ids are sequential ("edu1", ...).
pub fn extract_education(section_text: &str) -> Vec<Education> {
    let lines: Vec<&str> = section_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut education = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if !DEGREE.is_match(line) {
            continue;
        }

        let mut institution = String::new();
        let mut dates = Default::default();

        match lines.get(idx + 1) {
            Some(next) if has_date_signature(next) => {
                dates = parse_date_range(next);
                if idx > 0 && !DEGREE.is_match(lines[idx - 1]) && !has_date_signature(lines[idx - 1])
                {
                    institution = lines[idx - 1].to_string();
                }
            }
            Some(next) if !DEGREE.is_match(next) => {
                institution = next.to_string();
                if let Some(after) = lines.get(idx + 2) {
                    if has_date_signature(after) {
                        dates = parse_date_range(after);
                    }
                }
            }
            _ => {
                if idx > 0 && !DEGREE.is_match(lines[idx - 1]) {
                    institution = lines[idx - 1].to_string();
                }
            }
        }
        if institution.is_empty() {
            institution = "University".to_string();
        }

        // GPA may sit on any line of this entry's span.
        let span_end = lines[idx + 1..]
            .iter()
            .position(|l| DEGREE.is_match(l))
            .map(|p| idx + 1 + p)
            .unwrap_or(lines.len());
        let gpa = lines[idx..span_end]
            .iter()
            .find_map(|l| GPA.captures(l))
            .and_then(|cap| cap.get(1).map(|m| m.as_str().to_string()));

        education.push(Education {
            id: format!("edu{}", education.len() + 1),
            institution,
            degree: line.to_string(),
            field: field_of_study(line),
            start_date: dates.start,
            end_date: dates.end,
            gpa,
        });
    }

    // The shape didn't match but the section exists: keep at least one entry.
    if education.is_empty() && !lines.is_empty() {
        education.push(Education {
            id: "edu1".to_string(),
            institution: lines[0].to_string(),
            degree: lines.get(1).unwrap_or(&"Degree").to_string(),
            field: "Field of Study".to_string(),
            start_date: PLACEHOLDER_START.to_string(),
            end_date: PLACEHOLDER_END.to_string(),
            gpa: None,
        });
    }

    education
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_institution_above_degree_with_dates_below() {
        let entries = extract_education("MIT\nBachelor of Science\n2015 - 2019");
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.id, "edu1");
        assert_eq!(entry.institution, "MIT");
        assert_eq!(entry.degree, "Bachelor of Science");
        assert_eq!(entry.field, "Field of Study");
        assert_eq!(entry.start_date, "2015-01");
        assert_eq!(entry.end_date, "2019-12");
    }

    #[test]
    fn test_institution_below_degree() {
        let entries =
            extract_education("Master of Science in Computer Science\nStanford University\nSep 2019 - Jun 2021");
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.institution, "Stanford University");
        assert_eq!(entry.field, "Computer Science");
        assert_eq!(entry.start_date, "2019-09");
        assert_eq!(entry.end_date, "2021-06");
    }

    #[test]
    fn test_gpa_is_captured_within_entry_span() {
        let entries = extract_education("B.S. in Mathematics\nState College\nGPA: 3.85");
        assert_eq!(entries[0].gpa.as_deref(), Some("3.85"));
    }

    #[test]
    fn test_two_degrees() {
        let entries = extract_education(
            "MIT\nBachelor of Science in Physics\n2011 - 2015\nStanford University\nMaster of Science in Computer Science\n2015 - 2017",
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].institution, "MIT");
        assert_eq!(entries[0].field, "Physics");
        assert_eq!(entries[1].id, "edu2");
        assert_eq!(entries[1].institution, "Stanford University");
        assert_eq!(entries[1].field, "Computer Science");
    }

    #[test]
    fn test_non_matching_section_falls_back_to_first_lines() {
        let entries = extract_education("Springfield Technical Institute\nDiploma in Welding");
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.institution, "Springfield Technical Institute");
        assert_eq!(entry.degree, "Diploma in Welding");
        assert_eq!(entry.start_date, PLACEHOLDER_START);
        assert_eq!(entry.end_date, PLACEHOLDER_END);
    }

    #[test]
    fn test_empty_section_yields_no_entries() {
        assert!(extract_education("").is_empty());
    }
}
