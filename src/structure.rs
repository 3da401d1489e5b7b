//! `structure` — load the shape of a crossword grid
//!
//! The text format is one line per grid row. An underscore (`_`) is an open cell;
//! any other character is a blocked cell. Lines may be ragged: columns past the end of
//! a short line count as blocked, and the grid is as wide as its longest line.
//!
//! ```text
//! #___#
//! #_##_
//! #_##_
//! #_##_
//! #____
//! ```
//!
//! From the open cells we derive the [`Variable`]s: every maximal horizontal or vertical
//! run of two or more open cells.

use crate::errors::{ParseError, PuzzleError};
use crate::puzzle::Puzzle;
use crate::variable::Variable;

/// Character marking an open cell in a structure file.
pub const OPEN_CELL: char = '_';

/// Shape of the grid: which cells take letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub width: usize,
    pub height: usize,
    /// `cells[row][col]` is true for an open cell.
    cells: Vec<Vec<bool>>,
}

impl Structure {
    /// Parse a structure from an in-memory string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyStructure`] if `contents` has no lines.
    pub fn parse_from_str(contents: &str) -> Result<Structure, ParseError> {
        let rows: Vec<&str> = contents.lines().collect();
        if rows.is_empty() {
            return Err(ParseError::EmptyStructure);
        }

        let width = rows.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let cells = rows
            .iter()
            .map(|line| {
                let mut row: Vec<bool> = line.chars().map(|c| c == OPEN_CELL).collect();
                row.resize(width, false);
                row
            })
            .collect();

        Ok(Structure { width, height: rows.len(), cells })
    }

    /// Read a structure file from disk and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the file cannot be read, or any error from
    /// [`Structure::parse_from_str`].
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Structure, ParseError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| ParseError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        Self::parse_from_str(&data)
    }

    /// Is `(row, col)` an open cell? Anything outside the grid is blocked.
    #[must_use]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cells.get(row).and_then(|r| r.get(col)).copied().unwrap_or(false)
    }

    /// Every run of two or more open cells, across and down.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if !self.is_open(row, col) {
                    continue;
                }

                // down: starts here if the cell above is blocked or off-grid
                if row == 0 || !self.is_open(row - 1, col) {
                    let length = (row..self.height).take_while(|&r| self.is_open(r, col)).count();
                    if length > 1 {
                        variables.push(Variable::down(row, col, length));
                    }
                }

                // across: starts here if the cell to the left is blocked or off-grid
                if col == 0 || !self.is_open(row, col - 1) {
                    let length = (col..self.width).take_while(|&c| self.is_open(row, c)).count();
                    if length > 1 {
                        variables.push(Variable::across(row, col, length));
                    }
                }
            }
        }
        variables
    }

    /// Build the puzzle description for this grid.
    ///
    /// # Errors
    ///
    /// Propagates [`PuzzleError`] from [`Puzzle::from_variables`]; runs derived from a grid
    /// never trigger one.
    pub fn to_puzzle(&self) -> Result<Puzzle, PuzzleError> {
        Puzzle::from_variables(self.variables())
    }
}
