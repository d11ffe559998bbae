//! ATS compatibility scoring.
//!
//! Five independent sub-scores, each a pure function with a fixed point
//! allocation, combined by a weighted sum. Point tables live next to the
//! function that spends them so weights and caps can change without touching
//! extraction logic.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::{Education, Experience, Resume};
use crate::models::score::{AtsScore, ScoreBreakdown};
use crate::scoring::keywords::{extract_important_keywords, keyword_exists_in_text};
use crate::scoring::vocab::{ACTION_VERB_PATTERN, METRIC_PATTERN};

lazy_static! {
    static ref DECORATIVE_GLYPHS: Regex =
        Regex::new(r"[\u{2605}\u{2606}\u{2666}\u{25C6}\u{25CF}\u{25CB}]").unwrap();
    static ref BULLET_MARKERS: Regex = Regex::new(r"[\u{2022}*-]").unwrap();
    static ref PHONE_HINT: Regex = Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();
}

/// A job description shorter than this is treated as absent.
const MIN_JD_LEN: usize = 50;

/// Weights of the overall composite.
const WEIGHT_FORMATTING: f64 = 0.20;
const WEIGHT_KEYWORDS: f64 = 0.30;
const WEIGHT_EXPERIENCE: f64 = 0.25;
const WEIGHT_EDUCATION: f64 = 0.10;
const WEIGHT_SKILLS: f64 = 0.15;

/// Computes the full ATS score for a resume, optionally against a job
/// description. Pure: same inputs always produce the same report.
pub fn calculate_ats_score(resume: &Resume, job_description: Option<&str>) -> AtsScore {
    let breakdown = ScoreBreakdown {
        formatting: formatting_score(resume),
        keywords: keyword_score(resume, job_description),
        experience: experience_score(&resume.content.experience),
        education: education_score(&resume.content.education),
        skills: skills_score(&resume.content.skills),
    };

    let overall_score = (breakdown.formatting as f64 * WEIGHT_FORMATTING
        + breakdown.keywords as f64 * WEIGHT_KEYWORDS
        + breakdown.experience as f64 * WEIGHT_EXPERIENCE
        + breakdown.education as f64 * WEIGHT_EDUCATION
        + breakdown.skills as f64 * WEIGHT_SKILLS)
        .round() as u32;

    let (recommendations, missing_keywords, found_keywords) =
        build_recommendations(resume, &breakdown, job_description);

    AtsScore {
        overall_score,
        breakdown,
        recommendations,
        missing_keywords,
        found_keywords,
    }
}

/// `points * numerator / denominator`, rounded.
fn scaled(numerator: usize, denominator: usize, points: f64) -> u32 {
    (numerator as f64 / denominator as f64 * points).round() as u32
}

/// Formatting (0-100): section presence 7/7/6, personal-info fields 5 each,
/// summary > 50 chars 15, no decorative glyphs 7, bullet markers 7, word
/// count in [200, 1000] 6, email pattern 8, phone pattern 7, LinkedIn 5,
/// GitHub 5.
pub fn formatting_score(resume: &Resume) -> u32 {
    let content = &resume.content;
    let mut score = 0;

    if !content.experience.is_empty() {
        score += 7;
    }
    if !content.education.is_empty() {
        score += 7;
    }
    if !content.skills.is_empty() {
        score += 6;
    }

    let info = &content.personal_info;
    if !info.name.is_empty() {
        score += 5;
    }
    if !info.email.is_empty() {
        score += 5;
    }
    if info.phone.is_some() {
        score += 5;
    }
    if info.location.is_some() {
        score += 5;
    }

    if content.summary.as_ref().is_some_and(|s| s.len() > 50) {
        score += 15;
    }

    let text = &resume.raw_text;
    if !DECORATIVE_GLYPHS.is_match(text) {
        score += 7;
    }
    if BULLET_MARKERS.is_match(text) {
        score += 7;
    }
    let word_count = text.split_whitespace().count();
    if (200..=1000).contains(&word_count) {
        score += 6;
    }
    if text.contains('@') {
        score += 8;
    }
    if PHONE_HINT.is_match(text) {
        score += 7;
    }

    if info.linked_in.is_some() {
        score += 5;
    }
    if info.github.is_some() {
        score += 5;
    }

    score.min(100)
}

/// Keyword match (0-100). Without a meaningful job description the score is
/// a completeness baseline; with one, coverage runs through a three-segment
/// curve so the 30% and 60% thresholds are clearly separated bands.
pub fn keyword_score(resume: &Resume, job_description: Option<&str>) -> u32 {
    let jd = match job_description {
        Some(jd) if jd.trim().len() >= MIN_JD_LEN => jd,
        _ => {
            let mut base = 60;
            if resume.content.skills.len() >= 10 {
                base += 15;
            }
            if !resume.content.experience.is_empty() {
                base += 15;
            }
            if !resume.content.education.is_empty() {
                base += 10;
            }
            return base.min(100);
        }
    };

    let resume_text = resume.raw_text.to_lowercase();
    let jd_keywords = extract_important_keywords(jd);
    if jd_keywords.is_empty() {
        return 75;
    }

    let matched = jd_keywords
        .iter()
        .filter(|kw| keyword_exists_in_text(kw, &resume_text))
        .count();
    coverage_to_score(matched as f64 / jd_keywords.len() as f64)
}

/// Piecewise-linear coverage curve: [0,0.3] -> [0,40], [0.3,0.6] -> [40,70],
/// [0.6,1.0] -> [70,100].
fn coverage_to_score(coverage: f64) -> u32 {
    let score = if coverage <= 0.3 {
        coverage / 0.3 * 40.0
    } else if coverage <= 0.6 {
        40.0 + (coverage - 0.3) / 0.3 * 30.0
    } else {
        70.0 + (coverage - 0.6) / 0.4 * 30.0
    };
    score.round() as u32
}

/// Is this bullet results-oriented: an action verb paired with either a
/// metric or adequate descriptive length (8-30 words)?
pub fn is_strong_bullet(bullet: &str) -> bool {
    let has_action_verb = ACTION_VERB_PATTERN.is_match(bullet);
    if !has_action_verb {
        return false;
    }
    if METRIC_PATTERN.is_match(bullet) {
        return true;
    }
    let word_count = bullet.split_whitespace().count();
    (8..=30).contains(&word_count)
}

/// Experience (0-100): none -> flat 20; else 10/entry capped at 30, 40 x
/// strong-bullet fraction, 15 x dated fraction, 15 x company+position
/// fraction.
pub fn experience_score(experiences: &[Experience]) -> u32 {
    if experiences.is_empty() {
        return 20;
    }

    let mut score = (experiences.len() as u32 * 10).min(30);

    let total_bullets: usize = experiences.iter().map(|e| e.bullets.len()).sum();
    let strong_bullets: usize = experiences
        .iter()
        .flat_map(|e| e.bullets.iter())
        .filter(|b| is_strong_bullet(b))
        .count();
    if total_bullets > 0 {
        score += scaled(strong_bullets, total_bullets, 40.0);
    }

    let dated = experiences
        .iter()
        .filter(|e| !e.start_date.is_empty() && !e.end_date.is_empty())
        .count();
    score += scaled(dated, experiences.len(), 15.0);

    let detailed = experiences
        .iter()
        .filter(|e| !e.company.is_empty() && !e.position.is_empty())
        .count();
    score += scaled(detailed, experiences.len(), 15.0);

    score.min(100)
}

/// Education (0-100): none -> flat 30; else 20/entry capped at 40, plus 15
/// per present field (institution, degree, field, both dates) across all
/// entries, capped only at the end.
pub fn education_score(education: &[Education]) -> u32 {
    if education.is_empty() {
        return 30;
    }

    let mut score = (education.len() as u32 * 20).min(40);
    for entry in education {
        if !entry.institution.is_empty() {
            score += 15;
        }
        if !entry.degree.is_empty() {
            score += 15;
        }
        if !entry.field.is_empty() {
            score += 15;
        }
        if !entry.start_date.is_empty() && !entry.end_date.is_empty() {
            score += 15;
        }
    }

    score.min(100)
}

/// Skills (0-100): none -> flat 20; else min(80, 5/skill) plus a variety
/// bonus of 20 at 5+ skills (4/skill below that).
pub fn skills_score(skills: &[String]) -> u32 {
    if skills.is_empty() {
        return 20;
    }
    let base = (skills.len() as u32 * 5).min(80);
    let variety = if skills.len() >= 5 {
        20
    } else {
        skills.len() as u32 * 4
    };
    (base + variety).min(100)
}

/// Threshold-driven recommendations plus the keyword match/miss lists when a
/// job description was supplied.
fn build_recommendations(
    resume: &Resume,
    breakdown: &ScoreBreakdown,
    job_description: Option<&str>,
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut recommendations = Vec::new();
    let mut missing_keywords = Vec::new();
    let mut found_keywords = Vec::new();

    if breakdown.formatting < 70 {
        if resume.content.personal_info.phone.is_none() {
            recommendations.push("Add your phone number to improve ATS parsing".to_string());
        }
        if resume.content.summary.as_deref().unwrap_or("").is_empty() {
            recommendations
                .push("Add a professional summary at the top of your resume".to_string());
        }
        if resume.content.experience.is_empty() {
            recommendations
                .push("Add work experience section with detailed bullet points".to_string());
        }
    }

    if breakdown.experience < 70 {
        recommendations
            .push("Use strong action verbs at the start of each bullet point".to_string());
        recommendations
            .push("Quantify your achievements with numbers, percentages, or metrics".to_string());
        recommendations.push("Ensure each experience has 3-5 detailed bullet points".to_string());
    }

    if breakdown.skills < 60 {
        recommendations.push("Add more relevant technical and professional skills".to_string());
        recommendations.push("Include tools, technologies, and methodologies you know".to_string());
    }

    if breakdown.education < 60 {
        recommendations
            .push("Complete your education details with degree, field, and dates".to_string());
    }

    match job_description {
        Some(jd) if jd.trim().len() >= MIN_JD_LEN => {
            let resume_text = resume.raw_text.to_lowercase();
            let jd_keywords = extract_important_keywords(jd);

            if !jd_keywords.is_empty() {
                for keyword in jd_keywords {
                    if keyword_exists_in_text(&keyword, &resume_text) {
                        found_keywords.push(keyword);
                    } else if keyword.len() > 2 {
                        missing_keywords.push(keyword);
                    }
                }

                if breakdown.keywords < 60 {
                    if !missing_keywords.is_empty() {
                        let top: Vec<&str> = missing_keywords
                            .iter()
                            .take(5)
                            .map(String::as_str)
                            .collect();
                        recommendations.push(format!(
                            "Add key skills from job description: {}",
                            top.join(", ")
                        ));
                    }
                    recommendations.push(
                        "Incorporate job description keywords naturally throughout your resume"
                            .to_string(),
                    );
                } else if !missing_keywords.is_empty() && missing_keywords.len() <= 3 {
                    recommendations
                        .push(format!("Consider adding: {}", missing_keywords.join(", ")));
                }

                if !found_keywords.is_empty() && breakdown.keywords >= 70 {
                    recommendations.push(format!(
                        "Great! Your resume matches {} key requirements",
                        found_keywords.len()
                    ));
                }
            }
        }
        Some(_) => {
            recommendations.push(
                "Tip: Provide a detailed job description for better keyword analysis".to_string(),
            );
        }
        None => {}
    }

    if recommendations.is_empty() {
        recommendations.push("Great job! Your resume is ATS-friendly".to_string());
        recommendations.push("Consider tailoring it for specific job descriptions".to_string());
    }

    (recommendations, missing_keywords, found_keywords)
}
