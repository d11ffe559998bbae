use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact block pulled from the top of a resume. Every field is best-effort:
/// `name` and `email` stay empty strings when unrecoverable, the rest are None.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// One dated position. Dates are `"YYYY-MM"` or the literal `"Present"`;
/// `id` is generated at parse time and stays stable across edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub bullets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_improved: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Structured view of one resume. Produced by the parsing pipeline; a parse
/// never fails, it degrades field by field toward this struct's `Default`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    pub personal_info: PersonalInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

/// Immutable snapshot of an uploaded resume. Edits produce a new value via
/// structural copy; scores are always recomputed from this, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub file_name: String,
    pub upload_date: DateTime<Utc>,
    pub raw_text: String,
    pub content: ResumeContent,
}

/// A job posting as the caller holds it. `requirements` and
/// `preferred_skills` are caller-supplied; the scoring engine derives its own
/// keyword set from `description`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub preferred_skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_info_serializes_camel_case() {
        let info = PersonalInfo {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            linked_in: Some("https://www.linkedin.com/in/jane".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["linkedIn"], "https://www.linkedin.com/in/jane");
        assert!(json.get("phone").is_none(), "absent optionals are omitted");
    }

    #[test]
    fn test_experience_round_trips() {
        let exp = Experience {
            id: "exp1".to_string(),
            company: "Acme Corp".to_string(),
            position: "Senior Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "Present".to_string(),
            location: None,
            bullets: vec!["Led a team of 5".to_string()],
            is_improved: None,
        };
        let json = serde_json::to_string(&exp).unwrap();
        assert!(json.contains("\"startDate\":\"2020-01\""));
        let back: Experience = serde_json::from_str(&json).unwrap();
        assert_eq!(back, exp);
    }

    #[test]
    fn test_resume_content_default_is_all_empty() {
        let content = ResumeContent::default();
        assert!(content.personal_info.name.is_empty());
        assert!(content.experience.is_empty());
        assert!(content.education.is_empty());
        assert!(content.skills.is_empty());
        assert!(content.summary.is_none());
    }
}
