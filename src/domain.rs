//! Domain store: the words still possible for each variable.
//!
//! Domains only shrink while the solver works; the only way back up is
//! [`Domains::restore`] with a [`DomainSnapshot`] taken earlier. A snapshot owns its
//! own sets (the words inside are shared, immutable `Rc<str>`), so removals made after
//! it was taken can never leak into it.

use std::collections::{BTreeMap, BTreeSet};

use crate::interner::Word;
use crate::puzzle::Puzzle;
use crate::variable::Variable;

/// Candidate words for one variable, kept sorted so iteration is reproducible.
pub type WordSet = BTreeSet<Word>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domains {
    sets: BTreeMap<Variable, WordSet>,
}

/// A by-value copy of every domain, as returned by [`Domains::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSnapshot(BTreeMap<Variable, WordSet>);

impl Domains {
    /// Seed every variable of `puzzle` with the full vocabulary.
    #[must_use]
    pub fn seeded(puzzle: &Puzzle, words: &[Word]) -> Self {
        let vocabulary: WordSet = words.iter().cloned().collect();
        let sets = puzzle.variables().map(|&v| (v, vocabulary.clone())).collect();
        Domains { sets }
    }

    /// The current candidates for `v`, if `v` is a known variable.
    #[must_use]
    pub fn get(&self, v: &Variable) -> Option<&WordSet> {
        self.sets.get(v)
    }

    /// Number of candidates left for `v` (zero for an unknown variable).
    #[must_use]
    pub fn size(&self, v: &Variable) -> usize {
        self.sets.get(v).map_or(0, BTreeSet::len)
    }

    #[must_use]
    pub fn is_empty_for(&self, v: &Variable) -> bool {
        self.size(v) == 0
    }

    /// Remove one word from `v`'s domain. Returns whether it was present.
    pub fn remove(&mut self, v: &Variable, word: &str) -> bool {
        self.sets.get_mut(v).is_some_and(|set| set.remove(word))
    }

    /// Keep only the words of `v`'s domain for which `keep` holds; returns how many were dropped.
    pub fn retain<F>(&mut self, v: &Variable, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let Some(set) = self.sets.get_mut(v) else {
            return 0;
        };
        let before = set.len();
        set.retain(|w| keep(&**w));
        before - set.len()
    }

    /// Iterate over `(variable, domain)` in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &WordSet)> {
        self.sets.iter()
    }

    /// Sum of all domain sizes.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.sets.values().map(BTreeSet::len).sum()
    }

    /// Capture the current state of every domain.
    #[must_use]
    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot(self.sets.clone())
    }

    /// Put every domain back the way it was when `snapshot` was taken.
    pub fn restore(&mut self, snapshot: DomainSnapshot) {
        self.sets = snapshot.0;
    }
}
