//! Partial mapping from variables to chosen words.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::interner::Word;
use crate::variable::{Direction, Variable};

/// Words chosen so far, one per variable.
///
/// The search never edits an assignment shared with another branch: each step builds
/// its extension with [`Assignment::with`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    words: BTreeMap<Variable, Word>,
}

impl Assignment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this assignment extended with `var = word`.
    #[must_use]
    pub fn with(&self, var: Variable, word: Word) -> Self {
        debug_assert!(!self.words.contains_key(&var), "{var} is already assigned");
        let mut words = self.words.clone();
        words.insert(var, word);
        Assignment { words }
    }

    #[must_use]
    pub fn get(&self, var: &Variable) -> Option<&str> {
        self.words.get(var).map(AsRef::as_ref)
    }

    #[must_use]
    pub fn contains(&self, var: &Variable) -> bool {
        self.words.contains_key(var)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> {
        self.words.iter().map(|(v, w)| (v, w.as_ref()))
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.words.keys()
    }

    /// Flatten into serializable entries, in variable order.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        self.iter()
            .map(|(v, w)| Entry {
                row: v.row,
                col: v.col,
                direction: v.direction,
                length: v.length,
                word: w.to_string(),
            })
            .collect()
    }
}

impl FromIterator<(Variable, Word)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, Word)>>(iter: I) -> Self {
        Assignment { words: iter.into_iter().collect() }
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter().map(|(v, w)| format!("{v}→{w}")).collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

/// One filled slot, as written by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
    pub word: String,
}
