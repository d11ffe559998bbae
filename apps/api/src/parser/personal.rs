//! Contact-field extraction. Every field is best-effort: a failed match
//! leaves the field empty or None, never an error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::PersonalInfo;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    /// 10 digits with optional country code and flexible separators.
    static ref PHONE: Regex =
        Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();
    static ref LINKEDIN: Regex = Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap();
    static ref GITHUB: Regex = Regex::new(r"(?i)github\.com/[\w-]+").unwrap();
    /// "City, ST" shaped two-token capitalized pattern.
    static ref LOCATION: Regex =
        Regex::new(r"\b([A-Z][a-z]+(?:\s[A-Z][a-z]+)*),\s*([A-Z]{2})\b").unwrap();
    static ref URL: Regex = Regex::new(r"https?://[^\s]+").unwrap();
}

/// Prefixes a scheme onto domain-anchored matches like "linkedin.com/in/jane".
fn ensure_https(matched: &str) -> String {
    if matched.starts_with("http") {
        matched.to_string()
    } else {
        format!("https://www.{matched}")
    }
}

/// Extracts the contact block from the full document text. The name falls
/// back to the first non-blank line; resumes rarely label it.
pub fn extract_personal_info(text: &str) -> PersonalInfo {
    let mut info = PersonalInfo::default();

    if let Some(m) = EMAIL.find(text) {
        info.email = m.as_str().to_string();
    }
    if let Some(m) = PHONE.find(text) {
        info.phone = Some(m.as_str().to_string());
    }
    if let Some(line) = text.lines().map(str::trim).find(|l| !l.is_empty()) {
        info.name = line.to_string();
    }
    if let Some(m) = LINKEDIN.find(text) {
        info.linked_in = Some(ensure_https(m.as_str()));
    }
    if let Some(m) = GITHUB.find(text) {
        info.github = Some(ensure_https(m.as_str()));
    }
    if let Some(m) = LOCATION.find(text) {
        info.location = Some(m.as_str().to_string());
    }
    if let Some(m) = URL
        .find_iter(text)
        .find(|m| !m.as_str().contains("linkedin.com") && !m.as_str().contains("github.com"))
    {
        info.website = Some(m.as_str().to_string());
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Jane Doe\njane@x.com | (555) 123-4567\nBoston, MA\nlinkedin.com/in/janedoe\ngithub.com/janedoe\nhttps://janedoe.dev";

    #[test]
    fn test_full_header_extraction() {
        let info = extract_personal_info(HEADER);
        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.email, "jane@x.com");
        assert_eq!(info.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(info.location.as_deref(), Some("Boston, MA"));
        assert_eq!(
            info.linked_in.as_deref(),
            Some("https://www.linkedin.com/in/janedoe")
        );
        assert_eq!(info.github.as_deref(), Some("https://www.github.com/janedoe"));
        assert_eq!(info.website.as_deref(), Some("https://janedoe.dev"));
    }

    #[test]
    fn test_missing_fields_degrade_to_empty() {
        let info = extract_personal_info("Some unstructured text without contacts");
        assert_eq!(info.name, "Some unstructured text without contacts");
        assert_eq!(info.email, "");
        assert!(info.phone.is_none());
        assert!(info.location.is_none());
        assert!(info.linked_in.is_none());
        assert!(info.website.is_none());
    }

    #[test]
    fn test_empty_input_yields_default() {
        assert_eq!(extract_personal_info(""), PersonalInfo::default());
    }

    #[test]
    fn test_phone_with_country_code() {
        let info = extract_personal_info("Reach me at +1 555.123.4567");
        assert_eq!(info.phone.as_deref(), Some("+1 555.123.4567"));
    }

    #[test]
    fn test_multi_word_city_location() {
        let info = extract_personal_info("San Francisco, CA");
        assert_eq!(info.location.as_deref(), Some("San Francisco, CA"));
    }

    #[test]
    fn test_linkedin_url_is_not_mistaken_for_website() {
        let info = extract_personal_info("Profiles: https://www.linkedin.com/in/janedoe");
        assert!(info.website.is_none());
    }
}
