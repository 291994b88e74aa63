//! Property-based tests for figure extraction
//!
//! These tests throw random drawings at the extractor and check the invariants that
//! must hold whatever the input: it never panics, lines are straight and ordered,
//! no line glyph is left for text extraction, and plain words survive as labels.

use asciigram::diagram::{lines, Figure, Grid};
use asciigram::extract_figures;
use proptest::prelude::*;

/// Rows made of the glyphs that matter, some letters and plenty of blanks
fn drawing_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[-|+~!*<>^v ab\\\\]{0,12}", 0..8).prop_map(|rows| rows.join("\n"))
}

/// Rows of lowercase words separated by spaces, no glyph with a meaning
fn prose_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-uw-z ]{0,16}", 0..6).prop_map(|rows| rows.join("\n"))
}

fn count_cells(source: &str, glyphs: &[char]) -> usize {
    source.chars().filter(|ch| glyphs.contains(ch)).count()
}

proptest! {
    #[test]
    fn lines_are_straight_and_ordered(source in drawing_strategy()) {
        for figure in extract_figures(&source) {
            if let Figure::Line(line) = figure {
                prop_assert!(line.x0 == line.x1 || line.y0 == line.y1, "{:?}", line);
                prop_assert!(line.x0 <= line.x1 && line.y0 <= line.y1, "{:?}", line);
            }
        }
    }

    #[test]
    fn lines_precede_text(source in drawing_strategy()) {
        let figures = extract_figures(&source);
        let first_text = figures
            .iter()
            .position(|f| matches!(f, Figure::Text(_)))
            .unwrap_or(figures.len());
        prop_assert!(figures[first_text..].iter().all(|f| matches!(f, Figure::Text(_))));
    }

    #[test]
    fn every_line_consumes_a_line_cell(source in drawing_strategy()) {
        let lines = extract_figures(&source)
            .iter()
            .filter(|f| matches!(f, Figure::Line(_)))
            .count();
        prop_assert!(lines <= count_cells(&source, &['-', '|', '+']));
    }

    #[test]
    fn line_extraction_leaves_no_seed(source in drawing_strategy()) {
        let mut grid = Grid::parse(&source);
        lines::extract_lines(&mut grid);
        prop_assert_eq!(grid.find_seed(), None, "{}", grid);
    }

    #[test]
    fn labels_never_contain_seed_glyphs(source in drawing_strategy()) {
        for figure in extract_figures(&source) {
            if let Figure::Text(text) = figure {
                prop_assert!(!text.text.contains(['-', '|']), "{:?}", text);
            }
        }
    }

    #[test]
    fn labels_never_start_or_end_with_space(source in drawing_strategy()) {
        for figure in extract_figures(&source) {
            if let Figure::Text(text) = figure {
                prop_assert!(!text.text.starts_with(' '), "{:?}", text);
                prop_assert!(!text.text.ends_with(' '), "{:?}", text);
            }
        }
    }

    #[test]
    fn prose_words_survive(source in prose_strategy()) {
        let figures = extract_figures(&source);
        let words: Vec<String> = figures
            .iter()
            .filter_map(|f| match f {
                Figure::Text(text) => Some(text.text.clone()),
                Figure::Line(_) => None,
            })
            .flat_map(|text| text.split(' ').map(str::to_string).collect::<Vec<_>>())
            .collect();
        let expected: Vec<String> = source.split_whitespace().map(str::to_string).collect();
        prop_assert_eq!(words, expected);
    }

    #[test]
    fn blank_drawings_are_empty(rows in prop::collection::vec(" {0,10}", 0..6)) {
        prop_assert!(extract_figures(&rows.join("\n")).is_empty());
    }

    #[test]
    fn grid_is_rectangular(source in drawing_strategy()) {
        let grid = Grid::parse(&source);
        for y in 0..grid.height() {
            prop_assert_eq!(grid.row(y).len(), grid.width());
        }
    }
}
