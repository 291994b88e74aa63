//! Text extraction
//!
//! Runs once, after every line has been erased: whatever is still on the grid is
//! text. Each row is cut into runs of non-space characters. A run that starts exactly
//! one blank column after the previous label on the same row is glued onto it with a
//! single space, so `foo bar` stays one label while `foo  bar` becomes two.
//!
//! A label wrapped in backslashes, like `\note\`, is drawn in the alternate ink and
//! loses its backslashes.

use super::figure::{Color, Text};
use super::grid::Grid;
use tracing::trace;

/// Strips the backslash markers off a run, if it has them.
fn unescape(run: &str) -> (String, Color) {
    let mut chars = run.chars();
    let first = chars.next();
    let last = chars.next_back();

    match (first, last) {
        (Some('\\'), Some('\\')) => (chars.collect(), Color::Gray),
        _ => (run.to_string(), Color::Black),
    }
}

/// Returns true if a run starting at `start` on row `y` continues `prev`.
fn continues(prev: &Text, start: i32, y: i32) -> bool {
    prev.y0 == y && prev.x0 + prev.width() + 1 == start
}

/// Extracts text labels from whatever is left on the grid, row by row.
pub fn extract_text(grid: &Grid) -> Vec<Text> {
    let mut texts: Vec<Text> = Vec::new();

    for y in 0..grid.height() {
        let row = grid.row(y);
        let mut x = 0;

        while x < row.len() {
            if row[x] == ' ' {
                x += 1;
                continue;
            }

            let start = x;
            while x < row.len() && row[x] != ' ' {
                x += 1;
            }
            let run: String = row[start..x].iter().collect();
            let (start, y) = (start as i32, y as i32);

            match texts.last_mut() {
                Some(prev) if continues(prev, start, y) => {
                    trace!(x = start, y, run = %run, "merging text run");
                    prev.text.push(' ');
                    prev.text.push_str(&run);
                }
                _ => {
                    let (text, color) = unescape(&run);
                    texts.push(Text {
                        x0: start,
                        y0: y,
                        text,
                        color,
                    });
                }
            }
        }
    }

    texts
}
