//! Summary extraction: an explicitly headed section wins, else the first
//! substantial line near the top of the document.

const MAX_SUMMARY_CHARS: usize = 500;
/// Fallback scan window and minimum line length.
const FALLBACK_LINES: usize = 5;
const MIN_FALLBACK_LEN: usize = 50;

fn is_all_uppercase(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_whitespace())
}

/// Returns the summary text, truncated to 500 characters with an ellipsis.
/// The fallback skips header-ish lines: short ones, contact lines with `@`,
/// and all-uppercase headings.
pub fn extract_summary(text: &str, section_text: &str) -> Option<String> {
    let section = section_text.trim();
    if !section.is_empty() {
        let truncated: String = section.chars().take(MAX_SUMMARY_CHARS).collect();
        return if truncated.len() < section.len() {
            Some(format!("{truncated}..."))
        } else {
            Some(truncated)
        };
    }

    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(FALLBACK_LINES)
        .find(|line| line.len() > MIN_FALLBACK_LEN && !line.contains('@') && !is_all_uppercase(line))
        .map(str::to_string)
}
