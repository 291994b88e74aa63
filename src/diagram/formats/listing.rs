//! Listing formatter
//!
//! One line per figure, in extraction order, under a header that carries the canvas
//! size. Lines are drawn with an icon for their axis, labels with `¶`:
//!
//!     ⧉ diagram 190x70
//!     ├─ ─ (1,0)-(2,0) start=arrow end=arrow
//!     ├─ │ (0,1)-(0,2) color=#666
//!     └─ ¶ (2,2) "foo bar"
//!
//! Decorations and colours are only printed when present; black text is the norm
//! and is left out.

use super::registry::{FormatError, Formatter};
use crate::diagram::figure::{Color, Figure, Line, Text};
use crate::diagram::{Diagram, DEFAULT_CELL_SIZE};

fn line_icon(line: &Line) -> &'static str {
    match (line.is_horizontal(), line.is_vertical()) {
        (true, true) => "·",
        (true, false) => "─",
        _ => "│",
    }
}

fn format_line(line: &Line) -> String {
    let mut out = format!(
        "{} ({},{})-({},{})",
        line_icon(line),
        line.x0,
        line.y0,
        line.x1,
        line.y1
    );
    if let Some(start) = line.start {
        out.push_str(&format!(" start={start}"));
    }
    if let Some(end) = line.end {
        out.push_str(&format!(" end={end}"));
    }
    if line.color != Color::Default {
        out.push_str(&format!(" color={}", line.color));
    }
    out
}

fn format_text(text: &Text) -> String {
    let mut out = format!("¶ ({},{}) {:?}", text.x0, text.y0, text.text);
    if text.color != Color::Black {
        out.push_str(&format!(" color={}", text.color));
    }
    out
}

/// Render the listing of a diagram.
pub fn to_listing_str(diagram: &Diagram, cell_size: f64) -> String {
    let canvas = diagram.canvas(cell_size);
    let mut output = format!("⧉ diagram {}x{}\n", canvas.width, canvas.height);

    let count = diagram.figures().len();
    for (i, figure) in diagram.figures().iter().enumerate() {
        let connector = if i == count - 1 { "└─" } else { "├─" };
        let body = match figure {
            Figure::Line(line) => format_line(line),
            Figure::Text(text) => format_text(text),
        };
        output.push_str(&format!("{connector} {body}\n"));
    }

    output
}

/// Formatter implementation for the listing format
#[derive(Debug, Clone, Copy)]
pub struct ListingFormatter {
    cell_size: f64,
}

impl ListingFormatter {
    pub fn new(cell_size: f64) -> Self {
        ListingFormatter { cell_size }
    }
}

impl Default for ListingFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl Formatter for ListingFormatter {
    fn name(&self) -> &str {
        "listing"
    }

    fn serialize(&self, diagram: &Diagram) -> Result<String, FormatError> {
        Ok(to_listing_str(diagram, self.cell_size))
    }

    fn description(&self) -> &str {
        "One line per figure with canvas size header"
    }
}
