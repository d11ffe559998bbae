//! Layout-aware text reconstruction.
//!
//! Document decoders hand back glyph runs with page coordinates, and their
//! own whitespace is unreliable across producers. Reading order is rebuilt
//! here purely from position deltas: a large vertical jump starts a new line,
//! a horizontal gap wider than a glyph's natural advance becomes a space.

use serde::{Deserialize, Serialize};

/// One glyph run from a decoded document page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedFragment {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// Vertical delta (layout units) treated as a line break.
const LINE_BREAK_THRESHOLD: f32 = 5.0;
/// Horizontal gap beyond the previous fragment's right edge treated as a word gap.
const WORD_GAP_THRESHOLD: f32 = 1.0;

/// Linearizes the fragments of a single page into line-structured text.
pub fn linearize_page(fragments: &[PositionedFragment]) -> String {
    let mut out = String::new();
    let mut last_x = 0.0_f32;
    let mut last_y = 0.0_f32;

    for (index, fragment) in fragments.iter().enumerate() {
        if index > 0 {
            if (fragment.y - last_y).abs() > LINE_BREAK_THRESHOLD {
                out.push('\n');
                last_x = 0.0; // horizontal cursor resets on a new line
            } else if fragment.x - last_x > WORD_GAP_THRESHOLD {
                out.push(' ');
            }
        }
        out.push_str(&fragment.text);
        last_x = fragment.x + fragment.width;
        last_y = fragment.y;
    }

    out
}

/// Linearizes a whole document, pages in document order, separated by a blank line.
pub fn linearize_pages(pages: &[Vec<PositionedFragment>]) -> String {
    pages
        .iter()
        .map(|page| linearize_page(page))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, x: f32, y: f32, width: f32) -> PositionedFragment {
        PositionedFragment {
            text: text.to_string(),
            x,
            y,
            width,
        }
    }

    #[test]
    fn test_two_lines_with_word_gap() {
        let page = vec![
            frag("Jane", 0.0, 0.0, 20.0),
            frag("Doe", 25.0, 0.0, 15.0),
            frag("Engineer", 0.0, -10.0, 40.0),
        ];
        assert_eq!(linearize_page(&page), "Jane Doe\nEngineer");
    }

    #[test]
    fn test_adjacent_fragments_do_not_gain_a_space() {
        // Kerned runs often split mid-word; the gap is below threshold.
        let page = vec![frag("Resu", 0.0, 0.0, 18.0), frag("me", 18.5, 0.0, 9.0)];
        assert_eq!(linearize_page(&page), "Resume");
    }

    #[test]
    fn test_small_vertical_jitter_stays_on_one_line() {
        let page = vec![
            frag("Senior", 0.0, 100.0, 30.0),
            frag("Engineer", 33.0, 97.0, 40.0),
        ];
        assert_eq!(linearize_page(&page), "Senior Engineer");
    }

    #[test]
    fn test_pages_are_separated_by_blank_line() {
        let pages = vec![
            vec![frag("Page one", 0.0, 0.0, 40.0)],
            vec![frag("Page two", 0.0, 0.0, 40.0)],
        ];
        assert_eq!(linearize_pages(&pages), "Page one\n\nPage two");
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(linearize_pages(&[]), "");
        assert_eq!(linearize_page(&[]), "");
    }
}
