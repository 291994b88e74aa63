//! Diagram extraction
//!
//! Extraction is a two phase pass over a private copy of the source:
//!
//!     source -> Grid -> lines (erased as found) -> text (whatever is left) -> figures
//!
//! The pass is total. Any text, including empty or meaningless text, yields a
//! (possibly empty) figure list, and the caller's string is never modified.

pub mod canvas;
pub mod figure;
pub mod formats;
pub mod glyphs;
pub mod grid;
pub mod lines;
pub mod loader;
pub mod testing;
pub mod text;

pub use canvas::{CanvasSize, DEFAULT_CELL_SIZE};
pub use figure::{Color, Decoration, Figure, Line, Text};
pub use grid::Grid;

use tracing::debug;

/// Parses an ASCII-art drawing into figures: every line first, then every label.
pub fn extract_figures(source: &str) -> Vec<Figure> {
    let mut grid = Grid::parse(source);

    let lines = lines::extract_lines(&mut grid);
    let texts = text::extract_text(&grid);
    debug!(
        width = grid.width(),
        height = grid.height(),
        lines = lines.len(),
        texts = texts.len(),
        "extracted figures"
    );

    lines
        .into_iter()
        .map(Figure::Line)
        .chain(texts.into_iter().map(Figure::Text))
        .collect()
}

/// An extracted diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    figures: Vec<Figure>,
}

impl Diagram {
    /// Extract the figures of `source`.
    pub fn parse(source: &str) -> Self {
        Diagram {
            figures: extract_figures(source),
        }
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn into_figures(self) -> Vec<Figure> {
        self.figures
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.figures.iter().filter_map(Figure::as_line)
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.figures.iter().filter_map(Figure::as_text)
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Canvas a renderer needs for this diagram at the given cell size.
    pub fn canvas(&self, cell_size: f64) -> CanvasSize {
        CanvasSize::of(&self.figures, cell_size)
    }
}
