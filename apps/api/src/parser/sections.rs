//! Heading-driven section segmentation.
//!
//! Each semantic section owns a heading keyword list. Capture starts right
//! after the first matching heading and runs greedily until the next
//! recognized heading of any *other* section, or end of input. A resume with
//! no matching heading simply yields an empty capture; downstream field
//! parsers turn that into empty results, never an error.

/// Semantic regions recognized in resume text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Awards,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Awards,
    ];

    /// Heading keywords, longest variant first so "WORK EXPERIENCE" wins over
    /// "EXPERIENCE" at the same position.
    pub fn headings(self) -> &'static [&'static str] {
        match self {
            Section::Summary => &[
                "PROFESSIONAL SUMMARY",
                "SUMMARY",
                "OBJECTIVE",
                "PROFILE",
                "ABOUT",
            ],
            Section::Experience => &[
                "WORK EXPERIENCE",
                "PROFESSIONAL EXPERIENCE",
                "EMPLOYMENT HISTORY",
                "WORK HISTORY",
                "EXPERIENCE",
            ],
            Section::Education => &[
                "EDUCATIONAL BACKGROUND",
                "ACADEMIC BACKGROUND",
                "QUALIFICATIONS",
                "EDUCATION",
            ],
            Section::Skills => &["TECHNICAL SKILLS", "CORE COMPETENCIES", "SKILLS"],
            Section::Projects => &["PROJECTS"],
            Section::Certifications => &["CERTIFICATIONS"],
            Section::Awards => &["AWARDS"],
        }
    }
}

/// Byte range of the first heading occurrence for `section`, if any.
fn find_heading(lower: &str, section: Section) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for heading in section.headings() {
        if let Some(start) = lower.find(&heading.to_ascii_lowercase()) {
            let end = start + heading.len();
            let better = match best {
                None => true,
                // Earliest match wins; at the same start the longer heading wins.
                Some((s, e)) => start < s || (start == s && end > e),
            };
            if better {
                best = Some((start, end));
            }
        }
    }
    best
}

/// Extracts the raw text of `section`, or an empty string when its heading is
/// absent.
pub fn extract_section(text: &str, section: Section) -> String {
    let lower = text.to_ascii_lowercase();
    let Some((_, heading_end)) = find_heading(&lower, section) else {
        return String::new();
    };

    let tail = &lower[heading_end..];
    let mut capture_end = tail.len();
    for other in Section::ALL {
        if other == section {
            continue;
        }
        for heading in other.headings() {
            if let Some(pos) = tail.find(&heading.to_ascii_lowercase()) {
                capture_end = capture_end.min(pos);
            }
        }
    }

    text[heading_end..heading_end + capture_end].trim().to_string()
}
