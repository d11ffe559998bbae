//! Advisory checks for layout patterns known to break ATS parsers. Pure
//! function over the raw (pre-normalization) text; all findings are
//! independent and unranked.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PIPE_TABLE: Regex = Regex::new(r"\|.*\|").unwrap();
    static ref DECORATIVE_GLYPHS: Regex =
        Regex::new(r"[\u{2605}\u{2606}\u{2666}\u{25C6}\u{25CF}\u{25CB}]").unwrap();
    static ref CONSECUTIVE_TABS: Regex = Regex::new(r"\t{2,}").unwrap();
    static ref STANDARD_SECTIONS: Regex = Regex::new(r"(?i)EXPERIENCE|EDUCATION|SKILLS").unwrap();
}

/// Flags layout constructs that commonly confuse ATS parsers.
pub fn detect_formatting_issues(text: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if PIPE_TABLE.is_match(text) {
        issues.push("Contains tables which may not be ATS-friendly".to_string());
    }
    if DECORATIVE_GLYPHS.is_match(text) {
        issues.push("Contains special symbols that may not parse correctly".to_string());
    }
    if CONSECUTIVE_TABS.is_match(text) {
        issues.push("May have multi-column layout which can confuse ATS".to_string());
    }
    if !STANDARD_SECTIONS.is_match(text) {
        issues.push("Missing standard sections (Experience, Education, Skills)".to_string());
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_with_sections_has_no_issues() {
        let text = "EXPERIENCE\nAcme\nEDUCATION\nMIT\nSKILLS\nRust";
        assert!(detect_formatting_issues(text).is_empty());
    }

    #[test]
    fn test_pipe_table_is_flagged() {
        let issues = detect_formatting_issues("EXPERIENCE | Company | Dates |");
        assert!(issues.iter().any(|i| i.contains("tables")));
    }

    #[test]
    fn test_decorative_glyphs_are_flagged() {
        let issues = detect_formatting_issues("EXPERIENCE\n\u{2605} Led the team");
        assert!(issues.iter().any(|i| i.contains("special symbols")));
    }

    #[test]
    fn test_consecutive_tabs_are_flagged() {
        let issues = detect_formatting_issues("EXPERIENCE\t\tEDUCATION");
        assert!(issues.iter().any(|i| i.contains("multi-column")));
    }

    #[test]
    fn test_missing_sections_are_flagged() {
        let issues = detect_formatting_issues("Just some text");
        assert!(issues.iter().any(|i| i.contains("Missing standard sections")));
    }

    #[test]
    fn test_multiple_independent_issues() {
        let issues = detect_formatting_issues("| a | b |\t\t\u{25CF}");
        assert_eq!(issues.len(), 4);
    }
}
