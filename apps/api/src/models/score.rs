use serde::{Deserialize, Serialize};

/// Per-factor sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub formatting: u32,
    pub keywords: u32,
    pub experience: u32,
    pub education: u32,
    pub skills: u32,
}

/// Composite ATS compatibility report. Derived, never persisted: recomputed
/// whenever the resume or job description changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScore {
    pub overall_score: u32,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub found_keywords: Vec<String>,
}

/// Resume-vs-job-description coverage report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_requirements: Vec<String>,
    pub missing_requirements: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementImpact {
    Low,
    Medium,
    High,
}

/// One suggested rewrite of an experience bullet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletImprovement {
    pub original: String,
    pub improved: String,
    pub reason: String,
    pub impact: ImprovementImpact,
}
