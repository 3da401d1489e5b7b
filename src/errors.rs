//! Error types for loading puzzles and validating puzzle descriptions.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup.
//!
//! Loading (`ParseError`):
//! - E001: `Io` (File could not be read)
//! - E002: `EmptyStructure` (Structure has no rows)
//! - E003: `EmptyWordList` (Word list has no words)
//!
//! Validation (`PuzzleError`):
//! - P001: `ZeroLength` (Variable with length zero)
//! - P002: `UnknownVariable` (Overlap names a variable outside the puzzle)
//! - P003: `SelfOverlap` (Variable overlapping itself)
//! - P004: `OverlapOutOfBounds` (Overlap index past the end of a word)
//! - P005: `ContradictoryOverlap` (Same pair given two different overlaps)
//!
//! # Examples
//!
//! ```
//! use crossfill::errors::PuzzleError;
//! use crossfill::variable::Variable;
//!
//! let err = PuzzleError::ZeroLength { variable: Variable::across(0, 0, 0) };
//! assert_eq!(err.code(), "P001");
//! println!("{}", err.display_detailed());
//! ```

use std::io;
use std::path::PathBuf;

use crate::variable::{Overlap, Variable};

/// Failure while reading a structure file or word list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Structure has no rows")]
    EmptyStructure,

    #[error("Word list has no words")]
    EmptyWordList,
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Io { .. } => "E001",
            ParseError::EmptyStructure => "E002",
            ParseError::EmptyWordList => "E003",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::Io { .. } => None,
            ParseError::EmptyStructure => {
                Some("Use one line per grid row, with '_' for open cells and '#' for blocks")
            }
            ParseError::EmptyWordList => Some("Put one candidate word per line"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A puzzle description that breaks the solver's input invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("variable {variable} has length zero")]
    ZeroLength { variable: Variable },

    #[error("overlap refers to {variable}, which is not part of the puzzle")]
    UnknownVariable { variable: Variable },

    #[error("variable {variable} cannot overlap itself")]
    SelfOverlap { variable: Variable },

    #[error("overlap index {index} is out of bounds for {variable}")]
    OverlapOutOfBounds { variable: Variable, index: usize },

    #[error("contradictory overlaps between {x} and {y}: ({}, {}) vs ({}, {})",
        .older.first, .older.second, .newer.first, .newer.second)]
    ContradictoryOverlap {
        x: Variable,
        y: Variable,
        older: Overlap,
        newer: Overlap,
    },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::ZeroLength { .. } => "P001",
            PuzzleError::UnknownVariable { .. } => "P002",
            PuzzleError::SelfOverlap { .. } => "P003",
            PuzzleError::OverlapOutOfBounds { .. } => "P004",
            PuzzleError::ContradictoryOverlap { .. } => "P005",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::ZeroLength { .. } => Some("Every variable must cover at least one cell"),
            PuzzleError::UnknownVariable { .. } => {
                Some("Add the variable to the puzzle or drop the overlap that names it")
            }
            PuzzleError::OverlapOutOfBounds { .. } => {
                Some("Overlap indices are zero-based positions within each word")
            }
            PuzzleError::ContradictoryOverlap { .. } => {
                Some("Two variables cross in at most one cell; give each pair a single overlap")
            }
            PuzzleError::SelfOverlap { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
