//! Immutable puzzle description: the variables to fill and how they cross.
//!
//! A [`Puzzle`] is built once (either from an explicit overlap table or from the
//! geometry of the variables) and then only read. The solver borrows it and owns
//! nothing but its own domains.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::debug;

use crate::errors::PuzzleError;
use crate::variable::{Overlap, Variable};

/// Variables plus the overlap lookup between every crossing pair.
#[derive(Debug, Clone, Default)]
pub struct Puzzle {
    variables: BTreeSet<Variable>,
    /// Keyed by ordered pair; always holds both `(x, y)` and `(y, x)`.
    overlaps: HashMap<(Variable, Variable), Overlap>,
    neighbors: BTreeMap<Variable, BTreeSet<Variable>>,
}

impl Puzzle {
    /// Build a puzzle from a variable set and an overlap table keyed by ordered pairs.
    ///
    /// Entries are mirrored so that `(x, y) -> (i, j)` also defines `(y, x) -> (j, i)`.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if a variable has length zero, or if an overlap names an
    /// unknown variable, pairs a variable with itself, points past the end of a word, or
    /// contradicts another entry for the same pair.
    pub fn new<V, O>(variables: V, overlaps: O) -> Result<Self, PuzzleError>
    where
        V: IntoIterator<Item = Variable>,
        O: IntoIterator<Item = ((Variable, Variable), Overlap)>,
    {
        let variables: BTreeSet<Variable> = variables.into_iter().collect();
        if let Some(&variable) = variables.iter().find(|v| v.length == 0) {
            return Err(PuzzleError::ZeroLength { variable });
        }

        let mut puzzle = Puzzle {
            neighbors: variables.iter().map(|&v| (v, BTreeSet::new())).collect(),
            variables,
            overlaps: HashMap::new(),
        };

        for ((x, y), overlap) in overlaps {
            puzzle.insert_overlap(x, y, overlap)?;
        }

        debug!(
            "puzzle: {} variables, {} crossings",
            puzzle.variables.len(),
            puzzle.overlaps.len() / 2
        );
        Ok(puzzle)
    }

    /// Build a puzzle whose overlaps are computed from the cells each variable covers.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::ZeroLength`] for a zero-length variable. Two variables that
    /// share more than one cell (e.g. parallel runs on top of each other) are reported as
    /// [`PuzzleError::ContradictoryOverlap`].
    pub fn from_variables<V>(variables: V) -> Result<Self, PuzzleError>
    where
        V: IntoIterator<Item = Variable>,
    {
        let variables: BTreeSet<Variable> = variables.into_iter().collect();

        // cell -> every (variable, index) covering it
        let mut covering: HashMap<(usize, usize), Vec<(Variable, usize)>> = HashMap::new();
        for v in &variables {
            for (k, cell) in v.cells().enumerate() {
                covering.entry(cell).or_default().push((*v, k));
            }
        }

        let mut overlaps = Vec::new();
        for vars_here in covering.values() {
            for (a, &(x, i)) in vars_here.iter().enumerate() {
                for &(y, j) in &vars_here[a + 1..] {
                    overlaps.push(((x, y), Overlap::new(i, j)));
                }
            }
        }

        Self::new(variables, overlaps)
    }

    fn insert_overlap(&mut self, x: Variable, y: Variable, overlap: Overlap) -> Result<(), PuzzleError> {
        for v in [x, y] {
            if !self.variables.contains(&v) {
                return Err(PuzzleError::UnknownVariable { variable: v });
            }
        }
        if x == y {
            return Err(PuzzleError::SelfOverlap { variable: x });
        }
        if overlap.first >= x.length {
            return Err(PuzzleError::OverlapOutOfBounds { variable: x, index: overlap.first });
        }
        if overlap.second >= y.length {
            return Err(PuzzleError::OverlapOutOfBounds { variable: y, index: overlap.second });
        }
        if let Some(&older) = self.overlaps.get(&(x, y)) {
            if older != overlap {
                return Err(PuzzleError::ContradictoryOverlap { x, y, older, newer: overlap });
            }
            return Ok(());
        }

        self.overlaps.insert((x, y), overlap);
        self.overlaps.insert((y, x), overlap.flipped());
        self.neighbors.entry(x).or_default().insert(y);
        self.neighbors.entry(y).or_default().insert(x);
        Ok(())
    }

    /// All variables, in ascending order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    #[must_use]
    pub fn contains(&self, v: &Variable) -> bool {
        self.variables.contains(v)
    }

    /// The overlap for the ordered pair `(x, y)`, or `None` if they do not cross.
    #[must_use]
    pub fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.overlaps.get(&(*x, *y)).copied()
    }

    /// Every variable that crosses `v`, in ascending order.
    pub fn neighbors(&self, v: &Variable) -> impl Iterator<Item = &Variable> {
        self.neighbors.get(v).into_iter().flatten()
    }

    /// Number of variables crossing `v`.
    #[must_use]
    pub fn degree(&self, v: &Variable) -> usize {
        self.neighbors.get(v).map_or(0, BTreeSet::len)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
