//! Figures produced by the extractor
//!
//! A diagram is described by two kinds of figures, both in grid coordinates:
//!
//! - [`Line`]: a straight, axis-aligned segment with optional decorations at both ends.
//! - [`Text`]: a label anchored at the cell of its first character.
//!
//! Renderers only read these; nothing in here depends on how they get drawn.

use serde::Serialize;
use std::fmt;

/// Decoration drawn at one extremity of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoration {
    /// From `*`
    Circle,
    /// From `<`, `>`, `^` or `v`
    Arrow,
}

impl Decoration {
    /// The decoration a line-ending glyph stands for.
    pub fn from_glyph(ch: char) -> Self {
        if ch == '*' {
            Decoration::Circle
        } else {
            Decoration::Arrow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decoration::Circle => "circle",
            Decoration::Arrow => "arrow",
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ink of a figure, serialized as the hex string renderers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Color {
    /// The renderer's default ink
    #[default]
    #[serde(rename = "")]
    Default,
    #[serde(rename = "#000")]
    Black,
    #[serde(rename = "#666")]
    Gray,
}

impl Color {
    pub fn as_hex(&self) -> &'static str {
        match self {
            Color::Default => "",
            Color::Black => "#000",
            Color::Gray => "#666",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hex())
    }
}

/// A straight line from `(x0, y0)` to `(x1, y1)`.
///
/// Lines are always horizontal or vertical, and `(x0, y0)` is never to the right of
/// or below `(x1, y1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub x0: i32,
    pub y0: i32,
    pub start: Option<Decoration>,
    pub x1: i32,
    pub y1: i32,
    pub end: Option<Decoration>,
    pub color: Color,
}

impl Line {
    /// Number of cells between the two endpoints; zero for a single-cell line.
    pub fn length(&self) -> i32 {
        (self.x1 - self.x0).abs() + (self.y1 - self.y0).abs()
    }

    pub fn is_horizontal(&self) -> bool {
        self.y0 == self.y1
    }

    pub fn is_vertical(&self) -> bool {
        self.x0 == self.x1
    }
}

/// A text annotation whose first character sits at `(x0, y0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub x0: i32,
    pub y0: i32,
    pub text: String,
    pub color: Color,
}

impl Text {
    /// Width of the label in cells.
    pub fn width(&self) -> i32 {
        self.text.chars().count() as i32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Figure {
    Line(Line),
    Text(Text),
}

impl Figure {
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Figure::Line(line) => Some(line),
            Figure::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Figure::Text(text) => Some(text),
            Figure::Line(_) => None,
        }
    }
}

impl From<Line> for Figure {
    fn from(line: Line) -> Self {
        Figure::Line(line)
    }
}

impl From<Text> for Figure {
    fn from(text: Text) -> Self {
        Figure::Text(text)
    }
}
