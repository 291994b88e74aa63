//! Canvas geometry
//!
//! Renderers draw each grid cell as a square of `cell_size` pixels and put figure
//! coordinates in the middle of their cell. This module does that mapping and
//! works out how big an image has to be to hold a set of figures.

use super::figure::Figure;
use serde::Serialize;

/// Pixel size of one grid cell when nothing else is configured.
pub const DEFAULT_CELL_SIZE: f64 = 20.0;

/// Centre of grid coordinate `coord` on the canvas.
pub fn to_canvas(coord: f64, cell_size: f64) -> f64 {
    coord * cell_size + cell_size / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Size of the canvas needed to draw `figures`.
    ///
    /// Covers every line endpoint and the last cell of every label. An empty list
    /// needs no canvas at all.
    pub fn of(figures: &[Figure], cell_size: f64) -> Self {
        let extent = figures
            .iter()
            .map(|figure| match figure {
                Figure::Line(line) => (line.x0.max(line.x1), line.y0.max(line.y1)),
                Figure::Text(text) => (text.x0 + (text.width() - 1).max(0), text.y0),
            })
            .reduce(|(ax, ay), (bx, by)| (ax.max(bx), ay.max(by)));

        match extent {
            Some((x, y)) => CanvasSize {
                width: to_canvas(f64::from(x) + 1.0, cell_size),
                height: to_canvas(f64::from(y) + 1.0, cell_size),
            },
            None => CanvasSize {
                width: 0.0,
                height: 0.0,
            },
        }
    }
}
