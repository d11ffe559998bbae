//! Text normalization for poorly-encoded source documents.
//!
//! Some encoders emit a space between every character ("S O M E S H"). The
//! collapse pass merges runs of single-character tokens back into words. It
//! is lossy by construction (a run of genuine one-letter words merges too),
//! so it only runs when the document actually looks character-spaced; see
//! `looks_character_spaced`. The whole routine is idempotent:
//! `normalize_text(normalize_text(t)) == normalize_text(t)` for any input.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MULTI_WHITESPACE: Regex = Regex::new(r"\s{2,}").unwrap();
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r"\s+([.,;:)])").unwrap();
    static ref SPACE_AFTER_OPEN: Regex = Regex::new(r"([(\[])\s+").unwrap();
}

/// Hard bound on collapse passes; in practice one pass reaches the fixpoint.
const MAX_COLLAPSE_PASSES: usize = 20;
/// Fraction of single-character tokens above which a document is treated as
/// character-spaced.
const SPACED_TOKEN_RATIO: f64 = 0.35;

/// Punctuation that may trail the final character of an artificially split word.
fn is_trailing_punct(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '(' | ')' | '&' | '-')
}

fn is_single_alnum(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_alphanumeric()
    )
}

/// Single alphanumeric character plus one trailing punctuation mark, e.g. "H.".
fn is_single_alnum_with_punct(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), None) if a.is_ascii_alphanumeric() && is_trailing_punct(b)
    )
}

/// Detection gate for the lossy collapse pass.
pub fn looks_character_spaced(text: &str) -> bool {
    let mut total = 0_usize;
    let mut single = 0_usize;
    for token in text.split_whitespace() {
        total += 1;
        if is_single_alnum(token) {
            single += 1;
        }
    }
    total > 0 && single as f64 / total as f64 > SPACED_TOKEN_RATIO
}

/// Merges runs of 2+ single-character tokens within one line.
///
/// A single-char-plus-punctuation token ("D.") joins and terminates a run.
/// Isolated one-letter words ("plan B failed") are left alone.
fn collapse_spaced_runs(line: &str) -> String {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if is_single_alnum(tokens[i]) {
            let mut merged = String::from(tokens[i]);
            let mut j = i + 1;
            while j < tokens.len() {
                if is_single_alnum(tokens[j]) {
                    merged.push_str(tokens[j]);
                    j += 1;
                } else if is_single_alnum_with_punct(tokens[j]) {
                    merged.push_str(tokens[j]);
                    j += 1;
                    break;
                } else {
                    break;
                }
            }
            if j - i >= 2 {
                out.push(merged);
                i = j;
                continue;
            }
        }
        out.push(tokens[i].to_string());
        i += 1;
    }

    out.join(" ")
}

/// Repairs character-spacing artifacts and tidies whitespace and punctuation
/// spacing. Never fails; empty input yields an empty string.
pub fn normalize_text(text: &str) -> String {
    let mut normalized = if looks_character_spaced(text) {
        let mut current = text.to_string();
        for _ in 0..MAX_COLLAPSE_PASSES {
            let next = current
                .lines()
                .map(collapse_spaced_runs)
                .collect::<Vec<_>>()
                .join("\n");
            if next == current {
                break;
            }
            current = next;
        }
        current
    } else {
        text.to_string()
    };

    normalized = MULTI_WHITESPACE.replace_all(&normalized, " ").into_owned();
    normalized = SPACE_BEFORE_PUNCT.replace_all(&normalized, "$1").into_owned();
    normalized = SPACE_AFTER_OPEN.replace_all(&normalized, "$1").into_owned();

    normalized.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fully_spaced_word_collapses() {
        assert_eq!(normalize_text("S O M E S H"), "SOMESH");
    }

    #[test]
    fn test_spaced_words_with_punctuation() {
        assert_eq!(normalize_text("H E L L O. W O R L D."), "HELLO. WORLD.");
    }

    #[test]
    fn test_healthy_text_is_untouched_by_collapse() {
        let text = "Jane Doe\nSenior Engineer at Acme Corp";
        assert_eq!(normalize_text(text), text);
    }

    #[test]
    fn test_isolated_single_letter_word_survives() {
        // Below the character-spacing gate; "B" must not merge into neighbours.
        assert_eq!(normalize_text("chose plan B over plan C today"), "chose plan B over plan C today");
    }

    #[test]
    fn test_multiple_spaces_collapse_to_one() {
        assert_eq!(normalize_text("too   many    spaces"), "too many spaces");
    }

    #[test]
    fn test_punctuation_spacing_is_trimmed() {
        assert_eq!(normalize_text("skills : Rust , Go ( systems )"), "skills: Rust, Go (systems)");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "S O M E S H",
            "H E L L O. W O R L D.",
            "Jane Doe\nSenior Engineer",
            "too   many    spaces , and ( padding )",
            "",
            "a b c d e f",
        ];
        for input in inputs {
            let once = normalize_text(input);
            let twice = normalize_text(&once);
            assert_eq!(twice, once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   \n  "), "");
    }

    #[test]
    fn test_gate_ratio() {
        assert!(looks_character_spaced("S O M E S H"));
        assert!(!looks_character_spaced("a normal sentence with words"));
        assert!(!looks_character_spaced(""));
    }
}
