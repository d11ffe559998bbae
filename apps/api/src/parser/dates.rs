//! Date-range recognition shared by the experience and education parsers.
//!
//! Ranges become `"YYYY-MM"` pairs. Explicit month-year pairs win for both
//! endpoints; bare years fall back to January/December; "Present"/"Current"
//! maps to the literal `"Present"` end date.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that marks a line as carrying dates: month-year, year-dash,
    /// or an ongoing-position marker.
    static ref DATE_SIGNATURE: Regex = Regex::new(
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)\.?\s+\d{4}|\b\d{4}\s*[-\u{2013}\u{2014}]|\bpresent\b|\bcurrent\b"
    )
    .unwrap();
    /// The stricter signature that starts a new dated entry while collecting
    /// bullets ("Present" alone does not).
    static ref NEW_ENTRY_SIGNATURE: Regex = Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4}|\b\d{4}\s*[-\u{2013}\u{2014}]"
    )
    .unwrap();
    static ref MONTH_YEAR: Regex = Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{4})"
    )
    .unwrap();
    static ref YEAR: Regex = Regex::new(r"\b(\d{4})\b").unwrap();
    static ref PRESENT: Regex = Regex::new(r"(?i)\b(present|current)\b").unwrap();
    /// Trailing date portion of a position line ("Senior Engineer Jan 2020 -
    /// Present" keeps only the title).
    static ref DATE_SUFFIX: Regex = Regex::new(
        r"(?i)\s*(\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4}.*|\b\d{4}\s*[-\u{2013}\u{2014}].*)$"
    )
    .unwrap();
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Does this line look like the dated header of an experience entry?
pub fn has_date_signature(line: &str) -> bool {
    DATE_SIGNATURE.is_match(line)
}

/// Does this line start a new dated entry? Used to stop bullet collection.
pub fn starts_new_dated_entry(line: &str) -> bool {
    NEW_ENTRY_SIGNATURE.is_match(line)
}

/// Removes a trailing date range from a position line. Returns the full line
/// when stripping would leave nothing.
pub fn strip_date_suffix(line: &str) -> String {
    let stripped = DATE_SUFFIX.replace(line, "").trim().to_string();
    if stripped.is_empty() {
        line.trim().to_string()
    } else {
        stripped
    }
}

fn month_number(name: &str) -> &'static str {
    match name.to_ascii_lowercase().as_str() {
        "jan" => "01",
        "feb" => "02",
        "mar" => "03",
        "apr" => "04",
        "may" => "05",
        "jun" => "06",
        "jul" => "07",
        "aug" => "08",
        "sep" => "09",
        "oct" => "10",
        "nov" => "11",
        "dec" => "12",
        _ => "01",
    }
}

/// Parses a date range like "Jan 2020 - Present" or "2015 - 2019".
pub fn parse_date_range(text: &str) -> DateRange {
    let mut end = String::new();
    if PRESENT.is_match(text) {
        end = "Present".to_string();
    }

    let month_years: Vec<String> = MONTH_YEAR
        .captures_iter(text)
        .map(|cap| format!("{}-{}", &cap[2], month_number(&cap[1])))
        .collect();
    let years: Vec<&str> = YEAR
        .captures_iter(text)
        .map(|cap| cap.get(1).map(|m| m.as_str()).unwrap_or_default())
        .collect();

    let start = if let Some(first) = month_years.first() {
        first.clone()
    } else if let Some(year) = years.first() {
        format!("{year}-01")
    } else {
        String::new()
    };

    if end.is_empty() {
        end = if month_years.len() >= 2 {
            month_years[1].clone()
        } else if years.len() >= 2 {
            format!("{}-12", years[1])
        } else if !start.is_empty() {
            "Present".to_string()
        } else {
            String::new()
        };
    }

    DateRange { start, end }
}
