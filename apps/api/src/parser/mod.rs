// Resume text understanding: normalization, section segmentation, and the
// per-field parsers. Everything here is pure and best-effort; a field that
// fails to match degrades to empty instead of failing the parse.

pub mod dates;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod handlers;
pub mod personal;
pub mod sections;
pub mod skills;
pub mod summary;

pub use formatting::detect_formatting_issues;

use crate::extract::normalize_text;
use crate::models::resume::ResumeContent;
use sections::{extract_section, Section};

/// Parses raw resume text into the structured record. Never fails: an empty
/// or unrecognizable document yields an all-empty `ResumeContent`.
pub fn parse_resume_text(text: &str) -> ResumeContent {
    let normalized = normalize_text(text);

    let summary_section = extract_section(&normalized, Section::Summary);
    let experience_section = extract_section(&normalized, Section::Experience);
    let education_section = extract_section(&normalized, Section::Education);
    let skills_section = extract_section(&normalized, Section::Skills);
    let certification_section = extract_section(&normalized, Section::Certifications);

    let certifications: Vec<String> = certification_section
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    ResumeContent {
        personal_info: personal::extract_personal_info(&normalized),
        summary: summary::extract_summary(&normalized, &summary_section),
        experience: experience::extract_experience(&experience_section),
        education: education::extract_education(&education_section),
        skills: skills::extract_skills(&normalized, &skills_section),
        certifications: (!certifications.is_empty()).then_some(certifications),
        projects: None,
    }
}
