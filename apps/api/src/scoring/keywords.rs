//! Important-keyword extraction from job descriptions, shared by the ATS
//! scorer and the job-match comparator.

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;

use crate::scoring::vocab::{KNOWN_TECH_SET, MULTI_WORD_PATTERNS, STOP_WORD_SET};

lazy_static! {
    static ref YEARS_OF_EXPERIENCE: Regex =
        Regex::new(r"(?i)\b(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)?").unwrap();
    static ref BACHELOR: Regex =
        Regex::new(r"(?i)\bbachelor'?s?\b|\bb\.s\.|\bb\.a\.|\bundergraduate\b").unwrap();
    static ref MASTER: Regex =
        Regex::new(r"(?i)\bmaster'?s?\b|\bm\.s\.|\bm\.a\.|\bgraduate degree\b").unwrap();
    static ref WORD_PUNCT: Regex = Regex::new(r"[,;/()\[\]]").unwrap();
}

fn strip_enclosing_punct(token: &str) -> &str {
    token.trim_matches(|c: char| {
        matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\'' | '(' | ')' | '[' | ']')
    })
}

fn is_pure_digits_or_space(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c.is_whitespace())
}

/// Does the keyword appear in the (lowercased) text, in its literal,
/// no-space, or hyphenated form?
pub fn keyword_exists_in_text(keyword: &str, text_lower: &str) -> bool {
    let normalized = keyword.to_lowercase();
    if text_lower.contains(&normalized) {
        return true;
    }
    let words: Vec<&str> = normalized.split_whitespace().collect();
    text_lower.contains(&words.join("")) || text_lower.contains(&words.join("-"))
}

/// Extracts the salient keyword set of a job description: multi-word
/// technical terms, curated single-token tech/role terms, a synthesized
/// "N+ years experience" phrase, and degree requirements. Deduplicated in
/// insertion order so derived scores are reproducible.
pub fn extract_important_keywords(job_description: &str) -> Vec<String> {
    let mut keywords: IndexSet<String> = IndexSet::new();

    // Multi-word terms run over the raw-cased text.
    for pattern in MULTI_WORD_PATTERNS.iter() {
        for cap in pattern.captures_iter(job_description) {
            keywords.insert(cap[1].to_lowercase().trim().to_string());
        }
    }

    let text = job_description.to_lowercase();

    // Curated single tokens, stripped of enclosing punctuation.
    let cleaned = WORD_PUNCT.replace_all(&text, " ");
    for token in cleaned.split_whitespace() {
        let token = strip_enclosing_punct(token);
        if token.len() >= 3
            && !STOP_WORD_SET.contains(token)
            && !token.chars().all(|c| c.is_ascii_digit())
            && KNOWN_TECH_SET.contains(token)
        {
            keywords.insert(token.to_string());
        }
    }

    if let Some(cap) = YEARS_OF_EXPERIENCE.captures(&text) {
        keywords.insert(format!("{}+ years experience", &cap[1]));
    }
    if BACHELOR.is_match(&text) {
        keywords.insert("bachelor's degree".to_string());
    }
    if MASTER.is_match(&text) {
        keywords.insert("master's degree".to_string());
    }

    keywords
        .into_iter()
        .filter(|kw| {
            kw.len() > 2 && !STOP_WORD_SET.contains(kw.as_str()) && !is_pure_digits_or_space(kw)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tech_tokens_are_extracted() {
        let keywords = extract_important_keywords(
            "We need a senior engineer with React, Kubernetes and PostgreSQL experience.",
        );
        assert!(keywords.contains(&"react".to_string()));
        assert!(keywords.contains(&"kubernetes".to_string()));
        assert!(keywords.contains(&"postgresql".to_string()));
        assert!(keywords.contains(&"senior".to_string()));
    }

    #[test]
    fn test_stop_words_are_dropped() {
        let keywords = extract_important_keywords("We are seeking a strong candidate");
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_multi_word_terms_are_lowercased() {
        let keywords =
            extract_important_keywords("Experience with Machine Learning and Node.js required");
        assert!(keywords.contains(&"machine learning".to_string()));
        assert!(keywords.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_years_of_experience_is_synthesized() {
        let keywords = extract_important_keywords("5+ years of experience with Python");
        assert!(keywords.contains(&"5+ years experience".to_string()));
    }

    #[test]
    fn test_degree_requirements_are_synthesized() {
        let keywords =
            extract_important_keywords("Bachelor's degree required, Master's preferred");
        assert!(keywords.contains(&"bachelor's degree".to_string()));
        assert!(keywords.contains(&"master's degree".to_string()));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let jd = "React, TypeScript, AWS, Docker, 3 years experience, bachelor's degree";
        assert_eq!(
            extract_important_keywords(jd),
            extract_important_keywords(jd)
        );
    }

    #[test]
    fn test_keyword_exists_matches_no_space_and_hyphen_forms() {
        assert!(keyword_exists_in_text("machine learning", "built machinelearning models"));
        assert!(keyword_exists_in_text("machine learning", "built machine-learning models"));
        assert!(keyword_exists_in_text("React", "shipped react components"));
        assert!(!keyword_exists_in_text("kubernetes", "worked with docker"));
    }

    #[test]
    fn test_empty_description_yields_no_keywords() {
        assert!(extract_important_keywords("").is_empty());
    }
}
