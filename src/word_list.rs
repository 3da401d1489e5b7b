//! `word_list` — load the vocabulary the solver fills the grid from
//!
//! The input has one word per line. Parsing:
//! - Surrounding whitespace is trimmed and empty lines are skipped.
//! - Words are normalized to uppercase.
//! - The final list is deduplicated and sorted by length first, then alphabetically.
//!
//! Words are interned (see [`crate::interner`]) so every variable's domain can share the
//! same allocations.

use crate::errors::ParseError;
use crate::interner::{intern, Word};

/// A processed, ready-to-use vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    /// Uppercase words, sorted by (length, alphabetical).
    /// Example: `["SIX", "TEN", "FIVE", "NINE", "SEVEN"]`
    words: Vec<Word>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_uppercase)
            .collect();

        // `dedup` only removes adjacent duplicates, so sort alphabetically first
        words.sort();
        words.dedup();

        // then (length, alphabetical); the sort is stable
        words.sort_by_key(|w| w.chars().count());

        WordList { words: words.into_iter().map(intern).collect() }
    }

    /// Read a word list from disk and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if unable to read a file at `path`, or
    /// [`ParseError::EmptyWordList`] if it holds no words.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, ParseError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| ParseError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let list = Self::parse_from_str(&data);
        if list.is_empty() {
            return Err(ParseError::EmptyWordList);
        }
        Ok(list)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
