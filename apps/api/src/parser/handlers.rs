//! HTTP adapters for resume parsing: multipart upload and pre-extracted text.
//!
//! These stay thin: validate the input, run the external decoder when needed,
//! and hand the resulting string to the pure pipeline.

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{linearize_pages, PositionedFragment};
use crate::models::resume::Resume;
use crate::parser::{detect_formatting_issues, parse_resume_text};
use crate::routes::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub resume: Resume,
    pub formatting_issues: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseTextRequest {
    /// Already-linearized document text.
    pub text: Option<String>,
    /// Positioned fragments per page, for decoders that expose layout.
    pub pages: Option<Vec<Vec<PositionedFragment>>>,
    pub file_name: Option<String>,
}

fn build_parse_response(raw_text: String, file_name: String) -> ParseResponse {
    let content = parse_resume_text(&raw_text);
    let formatting_issues = detect_formatting_issues(&raw_text);
    tracing::info!(
        file_name = %file_name,
        experience = content.experience.len(),
        education = content.education.len(),
        skills = content.skills.len(),
        "resume parsed"
    );
    ParseResponse {
        resume: Resume {
            id: Uuid::new_v4(),
            file_name,
            upload_date: Utc::now(),
            raw_text,
            content,
        },
        formatting_issues,
    }
}

fn is_pdf(content_type: &str, file_name: &str) -> bool {
    content_type == "application/pdf" || file_name.to_lowercase().ends_with(".pdf")
}

fn is_plain_text(content_type: &str, file_name: &str) -> bool {
    content_type.starts_with("text/plain") || file_name.to_lowercase().ends_with(".txt")
}

fn is_docx(content_type: &str, file_name: &str) -> bool {
    content_type == "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        || content_type == "application/msword"
        || file_name.to_lowercase().ends_with(".docx")
        || file_name.to_lowercase().ends_with(".doc")
}

/// POST /api/v1/resumes/parse
///
/// Multipart upload. PDFs are decoded server-side, plain text is taken as-is;
/// DOCX is decoded client-side and submitted through `parse-text`.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ParseResponse>>, AppError> {
    let mut file: Option<(String, String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            file = Some((file_name, content_type, data));
            break;
        }
    }

    let (file_name, content_type, data) =
        file.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::Validation(
            "File too large. Maximum size is 5MB.".to_string(),
        ));
    }

    let raw_text = if is_pdf(&content_type, &file_name) {
        pdf_extract::extract_text_from_mem(&data).map_err(|e| {
            tracing::warn!("PDF extraction failed for {file_name}: {e}");
            AppError::Extraction(
                "Failed to extract text from PDF. The file may be corrupted or password-protected."
                    .to_string(),
            )
        })?
    } else if is_plain_text(&content_type, &file_name) {
        String::from_utf8(data.to_vec())
            .map_err(|_| AppError::Extraction("Text file is not valid UTF-8.".to_string()))?
    } else if is_docx(&content_type, &file_name) {
        return Err(AppError::Validation(
            "DOCX files are decoded client-side. Submit the extracted text to /api/v1/resumes/parse-text."
                .to_string(),
        ));
    } else {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF and plain-text files are supported.".to_string(),
        ));
    };

    Ok(Json(ApiResponse::new(build_parse_response(
        raw_text, file_name,
    ))))
}

/// POST /api/v1/resumes/parse-text
///
/// Accepts either already-linearized `text` or positioned `pages`; the latter
/// goes through layout reconstruction first.
pub async fn handle_parse_text(
    State(_state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ApiResponse<ParseResponse>>, AppError> {
    let raw_text = match (req.pages, req.text) {
        (Some(pages), _) => linearize_pages(&pages),
        (None, Some(text)) => text,
        (None, None) => return Err(AppError::Validation("No text provided".to_string())),
    };

    let file_name = req.file_name.unwrap_or_else(|| "resume.pdf".to_string());
    Ok(Json(ApiResponse::new(build_parse_response(
        raw_text, file_name,
    ))))
}
