//! Skill extraction: delimiter-split section entries unioned with a
//! whole-document scan for well-known technology names.
//!
//! Dedup is case-insensitive with the first occurrence winning, so a skill
//! listed in the resume's own casing is not shadowed by the canonical
//! vocabulary casing later.

use lazy_static::lazy_static;
use regex::Regex;

/// Canonical display names scanned for across the whole document.
const COMMON_SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "Laravel",
    "HTML",
    "CSS",
    "Sass",
    "Tailwind",
    "Bootstrap",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "DynamoDB",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Git",
    "GitHub",
    "GitLab",
    "Jira",
    "Agile",
    "Scrum",
    "REST",
    "GraphQL",
    "API",
    "Microservices",
    "Machine Learning",
    "AI",
    "Data Analysis",
    "TensorFlow",
    "PyTorch",
];

lazy_static! {
    static ref DELIMITERS: Regex = Regex::new(r"[,;\u{2022}\n:-]").unwrap();
    static ref CATEGORY_LABEL: Regex =
        Regex::new(r"(?i)^(Frontend|Backend|Build|DevOps|Testing|Performance|System|Others?):\s*")
            .unwrap();
    static ref PARENTHETICAL: Regex = Regex::new(r"\([^)]*\)").unwrap();
    static ref CONNECTOR_WORD: Regex = Regex::new(r"(?i)^(and|or|the|with|in|of|for)$").unwrap();
    static ref FILLER_WORD: Regex =
        Regex::new(r"(?i)^(Optimization|Design|Knowledge|Quality|Basic|Practices)$").unwrap();
    /// One boundary-aware matcher per vocabulary entry. Plain `\b` cannot
    /// terminate terms ending in `+`, `#` or `.`, so boundaries are spelled
    /// out as not-alphanumeric neighbours.
    static ref COMMON_SKILL_MATCHERS: Vec<(&'static str, Regex)> = COMMON_SKILLS
        .iter()
        .map(|skill| {
            let pattern = format!(
                r"(?i)(?:^|[^A-Za-z0-9]){}(?:[^A-Za-z0-9]|$)",
                regex::escape(skill)
            );
            (*skill, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// Tokens within the [2, 40) character band that are not connector/filler
/// words survive the section split.
fn keep_section_token(token: &str) -> bool {
    token.len() > 1
        && token.len() < 40
        && !CONNECTOR_WORD.is_match(token)
        && !FILLER_WORD.is_match(token)
}

/// Extracts the deduplicated skill list from the skills section plus a
/// vocabulary scan of the entire document.
pub fn extract_skills(full_text: &str, section_text: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    let push = |skill: &str, skills: &mut Vec<String>, seen: &mut Vec<String>| {
        let lower = skill.to_lowercase();
        if !seen.contains(&lower) {
            seen.push(lower);
            skills.push(skill.to_string());
        }
    };

    for raw in DELIMITERS.split(section_text) {
        let token = CATEGORY_LABEL.replace(raw.trim(), "");
        let token = PARENTHETICAL.replace_all(&token, "");
        let token = token.trim();
        if keep_section_token(token) {
            push(token, &mut skills, &mut seen);
        }
    }

    for (display, matcher) in COMMON_SKILL_MATCHERS.iter() {
        if matcher.is_match(full_text) {
            push(display, &mut skills, &mut seen);
        }
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_split_on_commas() {
        let skills = extract_skills("", "Python, React, AWS");
        assert_eq!(skills, vec!["Python", "React", "AWS"]);
    }

    #[test]
    fn test_category_labels_and_parentheticals_are_stripped() {
        let skills = extract_skills("", "Frontend: React (hooks)\nBackend: Django");
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"Django".to_string()));
        assert!(!skills.iter().any(|s| s.contains('(')));
    }

    #[test]
    fn test_connector_and_filler_words_are_dropped() {
        let skills = extract_skills("", "React, and, Django, Design, Optimization");
        assert_eq!(skills, vec!["React", "Django"]);
    }

    #[test]
    fn test_vocabulary_scan_covers_whole_document() {
        let skills = extract_skills("Built services in Go with Docker and Kubernetes", "");
        assert!(skills.contains(&"Docker".to_string()));
        assert!(skills.contains(&"Kubernetes".to_string()));
    }

    #[test]
    fn test_punctuated_vocabulary_terms_match() {
        let skills = extract_skills("Fluent in C++, C# and Node.js; pipelines via CI/CD", "");
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"C#".to_string()));
        assert!(skills.contains(&"Node.js".to_string()));
        assert!(skills.contains(&"CI/CD".to_string()));
    }

    #[test]
    fn test_vocabulary_does_not_match_inside_words() {
        let skills = extract_skills("Reactive programming with Javan expertise", "");
        assert!(!skills.contains(&"React".to_string()));
        assert!(!skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_dedup_is_case_insensitive_first_wins() {
        let skills = extract_skills("Experienced with react in production", "react, Python");
        let react_count = skills.iter().filter(|s| s.eq_ignore_ascii_case("react")).count();
        assert_eq!(react_count, 1);
        assert!(skills.contains(&"react".to_string()), "section casing wins");
    }

    #[test]
    fn test_empty_inputs_yield_empty_list() {
        assert!(extract_skills("", "").is_empty());
    }
}
