//! Glyph classification
//!
//! Only a handful of characters mean something to the extractor:
//!
//!     line parts      |  -  +  ~  !
//!     line endings    *  <  >  ^  v
//!
//! `~` and `!` are the "alternate ink" versions of `-` and `|`. Everything else is
//! background or text.

use super::figure::Color;
use serde::Serialize;

/// A grid coordinate: column `x`, row `y`.
///
/// Coordinates are signed so that stepping off the edge of the grid is
/// representable; the grid answers such lookups with `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// One cell further along `step`.
    pub fn advance(self, step: Step) -> Self {
        Point::new(self.x + step.dx, self.y + step.dy)
    }

    /// One cell back against `step`.
    pub fn retreat(self, step: Step) -> Self {
        Point::new(self.x - step.dx, self.y - step.dy)
    }
}

/// Direction of growth of a line, always a unit step along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub dx: i32,
    pub dy: i32,
}

impl Step {
    pub const HORIZONTAL: Step = Step { dx: 1, dy: 0 };
    pub const VERTICAL: Step = Step { dx: 0, dy: 1 };

    /// The perpendicular axis.
    pub fn flipped(self) -> Self {
        Step {
            dx: 1 - self.dx,
            dy: 1 - self.dy,
        }
    }
}

/// Returns true if the character can be part of a line.
pub fn is_line_part(ch: char) -> bool {
    matches!(ch, '|' | '-' | '+' | '~' | '!')
}

/// Returns true if the character decorates the end of a line.
pub fn is_line_ending(ch: char) -> bool {
    matches!(ch, '*' | '<' | '>' | '^' | 'v')
}

/// Returns true for the two glyphs a line extraction can start from.
pub fn is_seed(ch: char) -> bool {
    matches!(ch, '-' | '|')
}

/// Ink of a line glyph, `None` when the glyph does not force a colour.
pub fn color_of(ch: char) -> Option<Color> {
    match ch {
        '~' | '!' => Some(Color::Gray),
        _ => None,
    }
}

/// Converts a seed glyph to the direction the line grows in.
pub fn direction_of(ch: char) -> Option<Step> {
    match ch {
        '-' => Some(Step::HORIZONTAL),
        '|' => Some(Step::VERTICAL),
        _ => None,
    }
}

/// What a `+` corner becomes once one of its segments has been extracted, judged
/// from a single neighbour on the perpendicular axis.
pub fn corner_replacement(neighbour: char) -> Option<char> {
    match neighbour {
        '|' | '!' | '+' => Some('|'),
        '-' | '~' => Some('-'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_parts() {
        for ch in ['|', '-', '+', '~', '!'] {
            assert!(is_line_part(ch), "{ch:?} should be a line part");
        }
        for ch in ['*', '<', 'a', ' ', '=', '/'] {
            assert!(!is_line_part(ch), "{ch:?} should not be a line part");
        }
    }

    #[test]
    fn test_line_endings() {
        for ch in ['*', '<', '>', '^', 'v'] {
            assert!(is_line_ending(ch));
        }
        assert!(!is_line_ending('V'));
        assert!(!is_line_ending('-'));
    }

    #[test]
    fn test_color_of_alternate_glyphs() {
        assert_eq!(color_of('~'), Some(Color::Gray));
        assert_eq!(color_of('!'), Some(Color::Gray));
        assert_eq!(color_of('-'), None);
        assert_eq!(color_of('+'), None);
    }

    #[test]
    fn test_direction_of() {
        assert_eq!(direction_of('-'), Some(Step::HORIZONTAL));
        assert_eq!(direction_of('|'), Some(Step::VERTICAL));
        assert_eq!(direction_of('~'), None);
    }

    #[test]
    fn test_step_flip_and_point_moves() {
        assert_eq!(Step::HORIZONTAL.flipped(), Step::VERTICAL);
        assert_eq!(Step::VERTICAL.flipped(), Step::HORIZONTAL);

        let p = Point::new(2, 3);
        assert_eq!(p.advance(Step::HORIZONTAL), Point::new(3, 3));
        assert_eq!(p.retreat(Step::VERTICAL), Point::new(2, 2));
    }

    #[test]
    fn test_corner_replacement() {
        assert_eq!(corner_replacement('|'), Some('|'));
        assert_eq!(corner_replacement('!'), Some('|'));
        assert_eq!(corner_replacement('+'), Some('|'));
        assert_eq!(corner_replacement('-'), Some('-'));
        assert_eq!(corner_replacement('~'), Some('-'));
        assert_eq!(corner_replacement(' '), None);
        assert_eq!(corner_replacement('x'), None);
    }
}
