//! HTTP adapters for scoring, job matching, and bullet improvement. Thin
//! wrappers over the pure scoring functions; scores are recomputed on every
//! call and never stored.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::{JobDescription, Resume};
use crate::models::score::{AtsScore, BulletImprovement, MatchAnalysis};
use crate::routes::ApiResponse;
use crate::scoring::ats::calculate_ats_score;
use crate::scoring::bullets::{apply_bullet_improvement, improve_bullet};
use crate::scoring::job_match::{compare_with_job_description, partition_requirements};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub resume: Resume,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub ats_score: AtsScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_analysis: Option<MatchAnalysis>,
}

/// POST /api/v1/resumes/score
pub async fn handle_score(
    State(_state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ApiResponse<ScoreResponse>>, AppError> {
    let jd = req.job_description.as_deref();
    let ats_score = calculate_ats_score(&req.resume, jd);
    let match_analysis = jd.map(|jd| compare_with_job_description(&req.resume, jd));

    tracing::info!(
        resume_id = %req.resume.id,
        overall = ats_score.overall_score,
        with_jd = jd.is_some(),
        "ATS score computed"
    );
    Ok(Json(ApiResponse::new(ScoreResponse {
        ats_score,
        match_analysis,
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub resume: Resume,
    pub job_description: JobDescription,
}

/// POST /api/v1/resumes/match
///
/// Takes the structured job description so caller-supplied requirement lines
/// can be partitioned alongside the derived keyword comparison.
pub async fn handle_match(
    State(_state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<ApiResponse<MatchAnalysis>>, AppError> {
    if req.job_description.description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description text is required".to_string(),
        ));
    }

    let mut analysis =
        compare_with_job_description(&req.resume, &req.job_description.description);
    let resume_text = req.resume.raw_text.to_lowercase();
    let (matched, missing) = partition_requirements(&req.job_description.requirements, &resume_text);
    analysis.matched_requirements = matched;
    analysis.missing_requirements = missing;

    Ok(Json(ApiResponse::new(analysis)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveBulletRequest {
    pub bullet: String,
}

/// POST /api/v1/bullets/improve
pub async fn handle_improve_bullet(
    State(_state): State<AppState>,
    Json(req): Json<ImproveBulletRequest>,
) -> Result<Json<ApiResponse<BulletImprovement>>, AppError> {
    if req.bullet.trim().is_empty() {
        return Err(AppError::Validation("No bullet text provided".to_string()));
    }
    Ok(Json(ApiResponse::new(improve_bullet(&req.bullet))))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyImprovementRequest {
    pub resume: Resume,
    pub experience_id: String,
    pub bullet_index: usize,
    pub improved_text: String,
}

/// POST /api/v1/resumes/apply-improvement
///
/// Returns a new resume value; the caller owns persistence of the copy.
pub async fn handle_apply_improvement(
    State(_state): State<AppState>,
    Json(req): Json<ApplyImprovementRequest>,
) -> Result<Json<ApiResponse<Resume>>, AppError> {
    let updated = apply_bullet_improvement(
        &req.resume,
        &req.experience_id,
        req.bullet_index,
        &req.improved_text,
    )
    .ok_or_else(|| {
        AppError::NotFound(format!(
            "No bullet {} in experience {}",
            req.bullet_index, req.experience_id
        ))
    })?;

    Ok(Json(ApiResponse::new(updated)))
}
