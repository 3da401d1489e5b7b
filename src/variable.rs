//! Value types describing the blank runs of a crossword grid.
//!
//! A [`Variable`] is one maximal run of open cells that needs a single word.
//! Identity is by `(row, col, direction, length)`, so variables are cheap `Copy`
//! keys for every map in the solver.

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Orientation of a run of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// One blank run in the grid.
///
/// Ordering is derived field by field (row, then column, then direction, then length),
/// which gives every collection keyed by `Variable` a stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    #[must_use]
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self { row, col, direction, length }
    }

    #[must_use]
    pub fn across(row: usize, col: usize, length: usize) -> Self {
        Self::new(row, col, Direction::Across, length)
    }

    #[must_use]
    pub fn down(row: usize, col: usize, length: usize) -> Self {
        Self::new(row, col, Direction::Down, length)
    }

    /// The `(row, col)` of the cell holding letter `k` of this variable's word.
    #[must_use]
    pub fn cell(&self, k: usize) -> (usize, usize) {
        debug_assert!(k < self.length, "cell index {k} out of bounds for {self}");
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// All cells covered by this variable, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |k| self.cell(k))
    }

    /// Index within this variable's word of `cell`, if the variable covers it.
    #[must_use]
    pub fn index_of(&self, cell: (usize, usize)) -> Option<usize> {
        let (r, c) = cell;
        let k = match self.direction {
            Direction::Across if r == self.row && c >= self.col => c - self.col,
            Direction::Down if c == self.col && r >= self.row => r - self.row,
            _ => return None,
        };
        (k < self.length).then_some(k)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {} : {}", self.row, self.col, self.direction, self.length)
    }
}

/// Shared-cell constraint between two crossing variables.
///
/// For the ordered pair `(x, y)`, letter `first` of x's word must equal letter
/// `second` of y's word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap {
    pub first: usize,
    pub second: usize,
}

impl Overlap {
    #[must_use]
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// The same constraint seen from the other variable.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self { first: self.second, second: self.first }
    }
}

/// Letter `idx` of `word`, counting `char`s.
#[inline]
#[must_use]
pub fn letter_at(word: &str, idx: usize) -> Option<char> {
    if word.is_ascii() {
        word.as_bytes().get(idx).map(|&b| b as char)
    } else {
        word.chars().nth(idx)
    }
}

/// Length of `word` in `char`s, which is what a variable's `length` counts.
#[inline]
#[must_use]
pub fn word_len(word: &str) -> usize {
    if word.is_ascii() {
        word.len()
    } else {
        word.chars().count()
    }
}
