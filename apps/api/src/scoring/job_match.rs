//! Resume vs job description comparison.
//!
//! Coverage is computed over the same important-keyword set the ATS scorer
//! uses; a keyword counts as matched when it appears in the resume text or
//! overlaps an entry of the explicit skill list.

use crate::models::resume::Resume;
use crate::models::score::MatchAnalysis;
use crate::scoring::keywords::{extract_important_keywords, keyword_exists_in_text};
use crate::scoring::vocab::STOP_WORD_SET;

/// Below this match score, generic tailoring suggestions are added.
const TAILORING_THRESHOLD: u32 = 60;

fn keyword_matches_skills(keyword: &str, skills_lower: &[String]) -> bool {
    let normalized = keyword.to_lowercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let no_space = words.join("");
    let hyphenated = words.join("-");
    skills_lower
        .iter()
        .any(|skill| skill.contains(&normalized) || *skill == no_space || *skill == hyphenated)
}

/// Compares a resume against a job description. The requirements lists stay
/// empty here; callers holding a structured `JobDescription` fill them via
/// `partition_requirements`.
pub fn compare_with_job_description(resume: &Resume, job_description: &str) -> MatchAnalysis {
    let jd_keywords = extract_important_keywords(job_description);
    let resume_text = resume.raw_text.to_lowercase();
    let skills_lower: Vec<String> = resume
        .content
        .skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for keyword in jd_keywords {
        if keyword_exists_in_text(&keyword, &resume_text)
            || keyword_matches_skills(&keyword, &skills_lower)
        {
            matched_skills.push(keyword);
        } else {
            missing_skills.push(keyword);
        }
    }

    let total = matched_skills.len() + missing_skills.len();
    let match_score = if total > 0 {
        (matched_skills.len() as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    let mut suggestions = Vec::new();
    if !missing_skills.is_empty() {
        let top: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();
        suggestions.push(format!("Add these key skills: {}", top.join(", ")));
    }
    if match_score < TAILORING_THRESHOLD {
        suggestions.push("Tailor your experience bullets to match job requirements".to_string());
        suggestions
            .push("Use keywords from the job description naturally in your resume".to_string());
    }

    MatchAnalysis {
        match_score,
        matched_skills,
        missing_skills,
        matched_requirements: Vec::new(),
        missing_requirements: Vec::new(),
        suggestions,
    }
}

/// Splits caller-supplied requirement lines into matched/missing against the
/// resume text. A requirement counts as matched when at least half of its
/// significant tokens appear.
pub fn partition_requirements(
    requirements: &[String],
    resume_text_lower: &str,
) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for requirement in requirements {
        let tokens: Vec<String> = requirement
            .to_lowercase()
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_ascii_alphanumeric()).to_string())
            .filter(|t| t.len() >= 3 && !STOP_WORD_SET.contains(t.as_str()))
            .collect();

        if tokens.is_empty() {
            missing.push(requirement.clone());
            continue;
        }
        let hits = tokens
            .iter()
            .filter(|t| resume_text_lower.contains(t.as_str()))
            .count();
        if hits * 2 >= tokens.len() {
            matched.push(requirement.clone());
        } else {
            missing.push(requirement.clone());
        }
    }

    (matched, missing)
}
