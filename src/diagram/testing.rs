//! Testing utilities for figure assertions
//!
//! Asserting on figures field by field gets noisy fast, and a bare `assert_eq!` on a
//! whole `Vec<Figure>` tells you little when it fails. `assert_figures` gives a fluent
//! API that checks the shape and content of an extraction, with messages that name
//! the figure that went wrong:
//!
//! ```rust-example
//! use asciigram::diagram::testing::assert_figures;
//!
//! let figures = extract_figures("<--> label");
//! assert_figures(&figures)
//!     .line_count(1)
//!     .text_count(1)
//!     .line(0, |l| {
//!         l.from(1, 0).to(2, 0).arrows();
//!     })
//!     .text(0, |t| {
//!         t.at(5, 0).text("label");
//!     });
//! ```
//!
//! Line and text indices count within their own kind, so `text(0, ..)` is the first
//! label whatever number of lines came before it.

use super::figure::{Color, Decoration, Figure, Line, Text};

/// Create an assertion builder for a figure list
pub fn assert_figures(figures: &[Figure]) -> FiguresAssertion<'_> {
    FiguresAssertion { figures }
}

fn summarize(figures: &[Figure]) -> String {
    figures
        .iter()
        .map(|figure| match figure {
            Figure::Line(l) => format!("Line({},{})-({},{})", l.x0, l.y0, l.x1, l.y1),
            Figure::Text(t) => format!("Text({:?})", t.text),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct FiguresAssertion<'a> {
    figures: &'a [Figure],
}

impl<'a> FiguresAssertion<'a> {
    fn lines(&self) -> Vec<&'a Line> {
        self.figures.iter().filter_map(Figure::as_line).collect()
    }

    fn texts(&self) -> Vec<&'a Text> {
        self.figures.iter().filter_map(Figure::as_text).collect()
    }

    /// Assert the list is empty
    pub fn is_empty(self) -> Self {
        assert!(
            self.figures.is_empty(),
            "Expected no figures, found: [{}]",
            summarize(self.figures)
        );
        self
    }

    /// Assert the number of lines
    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.lines().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} lines, found {}: [{}]",
            expected,
            actual,
            summarize(self.figures)
        );
        self
    }

    /// Assert the number of labels
    pub fn text_count(self, expected: usize) -> Self {
        let actual = self.texts().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} texts, found {}: [{}]",
            expected,
            actual,
            summarize(self.figures)
        );
        self
    }

    /// Assert every line precedes every label
    pub fn lines_before_text(self) -> Self {
        if let Some(first_text) = self.figures.iter().position(|f| f.as_text().is_some()) {
            assert!(
                self.figures[first_text..]
                    .iter()
                    .all(|f| f.as_text().is_some()),
                "Found a line after the first text: [{}]",
                summarize(self.figures)
            );
        }
        self
    }

    /// Assert on the line at `index` (counting lines only)
    pub fn line<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LineAssertion<'a>),
    {
        let lines = self.lines();
        assert!(
            index < lines.len(),
            "Line index {} out of bounds ({} lines)",
            index,
            lines.len()
        );
        assertion(LineAssertion {
            line: lines[index],
            context: format!("lines[{index}]"),
        });
        self
    }

    /// Assert on the label at `index` (counting labels only)
    pub fn text<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TextAssertion<'a>),
    {
        let texts = self.texts();
        assert!(
            index < texts.len(),
            "Text index {} out of bounds ({} texts)",
            index,
            texts.len()
        );
        assertion(TextAssertion {
            text: texts[index],
            context: format!("texts[{index}]"),
        });
        self
    }
}

pub struct LineAssertion<'a> {
    line: &'a Line,
    context: String,
}

impl LineAssertion<'_> {
    pub fn from(self, x: i32, y: i32) -> Self {
        assert_eq!(
            (self.line.x0, self.line.y0),
            (x, y),
            "{}: unexpected start point",
            self.context
        );
        self
    }

    pub fn to(self, x: i32, y: i32) -> Self {
        assert_eq!(
            (self.line.x1, self.line.y1),
            (x, y),
            "{}: unexpected end point",
            self.context
        );
        self
    }

    pub fn start(self, expected: Option<Decoration>) -> Self {
        assert_eq!(
            self.line.start, expected,
            "{}: unexpected start decoration",
            self.context
        );
        self
    }

    pub fn end(self, expected: Option<Decoration>) -> Self {
        assert_eq!(
            self.line.end, expected,
            "{}: unexpected end decoration",
            self.context
        );
        self
    }

    /// Shorthand for arrows on both ends
    pub fn arrows(self) -> Self {
        self.start(Some(Decoration::Arrow))
            .end(Some(Decoration::Arrow))
    }

    /// Shorthand for no decoration on either end
    pub fn plain(self) -> Self {
        self.start(None).end(None)
    }

    pub fn color(self, expected: Color) -> Self {
        assert_eq!(
            self.line.color, expected,
            "{}: unexpected color",
            self.context
        );
        self
    }

    pub fn horizontal(self) -> Self {
        assert!(
            self.line.is_horizontal(),
            "{}: expected a horizontal line, got {:?}",
            self.context,
            self.line
        );
        self
    }

    pub fn vertical(self) -> Self {
        assert!(
            self.line.is_vertical(),
            "{}: expected a vertical line, got {:?}",
            self.context,
            self.line
        );
        self
    }
}

pub struct TextAssertion<'a> {
    text: &'a Text,
    context: String,
}

impl TextAssertion<'_> {
    pub fn at(self, x: i32, y: i32) -> Self {
        assert_eq!(
            (self.text.x0, self.text.y0),
            (x, y),
            "{}: unexpected position",
            self.context
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.text.text, expected, "{}: unexpected text", self.context);
        self
    }

    pub fn color(self, expected: Color) -> Self {
        assert_eq!(
            self.text.color, expected,
            "{}: unexpected color",
            self.context
        );
        self
    }
}
