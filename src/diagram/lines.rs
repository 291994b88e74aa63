//! Line extraction
//!
//! Lines are pulled out of the grid one at a time. Each round:
//!
//! 1. Finds the first `-` or `|` in row-major order (the seed) and takes its axis as
//!    the direction of the line.
//! 2. Walks backward and forward from the seed over line parts, then swallows one
//!    line-ending glyph on each side if present.
//! 3. Erases the line from the grid so the next round cannot find it again.
//!
//! Erasing is not plain blanking: a `+` is where a perpendicular segment continues,
//! so it is rewritten as `|` or `-` depending on what is next to it across the line.
//! That way a box or an L-shape comes apart into straight lines over several rounds
//! without losing the connector the perpendicular segment still needs.
//!
//!     +--+        |  |        .  |        .  .        .  .
//!     |  |   ->   |  |   ->   .  |   ->   .  .   ->   .  .
//!     +--+        +--+        ---+        ----        .  .
//!
//! Arrowheads are erased where they were drawn, but the stored endpoint is pulled
//! one cell back inside the line so that it touches the arrow's target instead of
//! overlapping it.

use super::figure::{Color, Decoration, Line};
use super::glyphs::{
    color_of, corner_replacement, direction_of, is_line_ending, is_line_part, Point, Step,
};
use super::grid::Grid;
use tracing::trace;

/// How far a line reaches on one side of its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reach {
    end: Point,
    decoration: Option<Decoration>,
    color: Option<Color>,
}

/// Follows line parts from `seed` using `next` to move, then takes a trailing
/// line ending if there is one.
fn reach(grid: &Grid, seed: Point, step: Step, next: fn(Point, Step) -> Point) -> Reach {
    let mut end = seed;
    let mut color = None;

    while let Some(ch) = grid.at(next(end, step)).filter(|&ch| is_line_part(ch)) {
        end = next(end, step);
        color = color.or_else(|| color_of(ch));
    }

    let mut decoration = None;
    if let Some(ch) = grid.at(next(end, step)).filter(|&ch| is_line_ending(ch)) {
        end = next(end, step);
        decoration = Some(Decoration::from_glyph(ch));
    }

    Reach {
        end,
        decoration,
        color,
    }
}

/// Clears one cell of an extracted line. Corners are handed over to the
/// perpendicular segment when one is still there.
fn erase_cell(grid: &mut Grid, cell: Point, step: Step) {
    match grid.at(cell) {
        None => {}
        Some('+') => {
            let across = step.flipped();
            let replacement = [cell.retreat(across), cell.advance(across)]
                .into_iter()
                .filter_map(|neighbour| grid.at(neighbour))
                .find_map(corner_replacement)
                .unwrap_or(' ');
            grid.set(cell, replacement);
        }
        Some(_) => grid.set(cell, ' '),
    }
}

/// Erases the inner cells of the line first, then both endpoints.
fn erase(grid: &mut Grid, from: Point, to: Point, step: Step) {
    let span = (to.x - from.x) + (to.y - from.y);

    let mut cell = from;
    for _ in 1..span {
        cell = cell.advance(step);
        erase_cell(grid, cell, step);
    }

    erase_cell(grid, from, step);
    if to != from {
        erase_cell(grid, to, step);
    }
}

/// Extracts a single line and erases it from the grid. Returns `None` once no seed
/// is left.
pub fn extract_line(grid: &mut Grid) -> Option<Line> {
    let seed = grid.find_seed()?;
    let step = grid.at(seed).and_then(direction_of)?;

    let back = reach(grid, seed, step, Point::retreat);
    let forth = reach(grid, seed, step, Point::advance);

    // Must run before the arrow adjustment so the arrowheads themselves get erased.
    erase(grid, back.end, forth.end, step);

    let start = match back.decoration {
        Some(Decoration::Arrow) => back.end.advance(step),
        _ => back.end,
    };
    let end = match forth.decoration {
        Some(Decoration::Arrow) => forth.end.retreat(step),
        _ => forth.end,
    };

    let line = Line {
        x0: start.x,
        y0: start.y,
        start: back.decoration,
        x1: end.x,
        y1: end.y,
        end: forth.decoration,
        color: back.color.or(forth.color).unwrap_or_default(),
    };
    trace!(?seed, ?line, "extracted line");
    Some(line)
}

/// Extracts lines until none is left. The grid ends up with only text in it.
pub fn extract_lines(grid: &mut Grid) -> Vec<Line> {
    std::iter::from_fn(|| extract_line(grid)).collect()
}
