//! Lay an assignment out on its grid for display.

use crate::assignment::Assignment;
use crate::structure::Structure;

/// Drawn in place of a blocked cell.
pub const BLOCK: char = '█';

/// The letter each cell receives from `assignment`, indexed `[row][col]`.
///
/// Cells no assigned word covers (blocked, or open but unfilled) are `None`. Words
/// reaching outside the grid are clipped.
#[must_use]
pub fn letter_grid(structure: &Structure, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; structure.width]; structure.height];
    for (variable, word) in assignment.iter() {
        for ((row, col), c) in variable.cells().zip(word.chars()) {
            if let Some(cell) = letters.get_mut(row).and_then(|r| r.get_mut(col)) {
                *cell = Some(c);
            }
        }
    }
    letters
}

/// Render the grid as text: one line per row, letters in open cells (a space if the cell
/// is unfilled) and [`BLOCK`] for blocked cells.
#[must_use]
pub fn render(structure: &Structure, assignment: &Assignment) -> String {
    let letters = letter_grid(structure, assignment);
    let mut out = String::with_capacity(structure.height * (structure.width * 3 + 1));
    for (row, row_letters) in letters.iter().enumerate() {
        for (col, letter) in row_letters.iter().enumerate() {
            if structure.is_open(row, col) {
                out.push(letter.unwrap_or(' '));
            } else {
                out.push(BLOCK);
            }
        }
        out.push('\n');
    }
    out
}
