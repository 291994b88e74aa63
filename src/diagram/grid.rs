//! Character grid
//!
//! The source text turned into a rectangular, mutable matrix of characters. Rows
//! shorter than the widest one are padded with spaces, so every row has `width`
//! cells. Lookups outside the matrix return `None` instead of failing, which keeps
//! the neighbour checks of the extractor free of bounds arithmetic.

use super::glyphs::{is_seed, Point};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Build a grid from source text, one row per `\n` separated line.
    pub fn parse(source: &str) -> Self {
        let rows: Vec<&str> = source.split('\n').collect();
        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);

        let cells = rows
            .iter()
            .map(|row| {
                let mut cells: Vec<char> = row.chars().collect();
                cells.resize(width, ' ');
                cells
            })
            .collect();

        Grid { cells, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, point: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height()).then_some((x, y))
    }

    /// The character at `point`, or `None` outside the grid.
    pub fn at(&self, point: Point) -> Option<char> {
        self.index(point).map(|(x, y)| self.cells[y][x])
    }

    /// Overwrite the cell at `point`. Writes outside the grid are ignored.
    pub fn set(&mut self, point: Point, ch: char) {
        if let Some((x, y)) = self.index(point) {
            self.cells[y][x] = ch;
        }
    }

    /// Returns true if the cell at `point` exists and satisfies `predicate`.
    pub fn matches(&self, point: Point, predicate: impl Fn(char) -> bool) -> bool {
        self.at(point).is_some_and(predicate)
    }

    /// Row `y` as a slice of cells.
    pub fn row(&self, y: usize) -> &[char] {
        self.cells.get(y).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Finds the first cell, in row-major order, that starts an unextracted line.
    pub fn find_seed(&self) -> Option<Point> {
        self.cells.iter().enumerate().find_map(|(y, row)| {
            row.iter()
                .position(|&ch| is_seed(ch))
                .map(|x| Point::new(x as i32, y as i32))
        })
    }

    /// Returns true if every cell is a space.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|&ch| ch == ' ')
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
