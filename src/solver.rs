//! Constraint-satisfaction solver for filling a crossword.
//!
//! Every variable starts with the whole vocabulary as its domain. Solving then runs
//! three phases:
//!
//! 1. **Node consistency**: drop words of the wrong length ([`Solver::enforce_node_consistency`]).
//! 2. **Arc consistency**: AC-3 over every crossing until nothing more can be removed
//!    ([`Solver::ac3`]).
//! 3. **Backtracking search**: pick the unassigned variable with the fewest candidates
//!    (ties go to the one with most crossings), try its words least-constraining first,
//!    and after each tentative choice run AC-3 seeded only with the arcs pointing into the
//!    chosen variable. Domains are snapshotted before each choice and restored when the
//!    choice fails.
//!
//! "No solution" is a normal outcome ([`SolveStatus::Unsatisfiable`]), not an error.
//!
//! # Examples
//!
//! ```
//! use crossfill::interner::intern;
//! use crossfill::puzzle::Puzzle;
//! use crossfill::solver::{Solver, SolveStatus};
//! use crossfill::variable::Variable;
//!
//! let across = Variable::across(0, 0, 3);
//! let down = Variable::down(0, 1, 3);
//! let puzzle = Puzzle::from_variables([across, down])?;
//! let words: Vec<_> = ["CAT", "DOG", "TEN", "AND"].into_iter().map(intern).collect();
//!
//! let result = Solver::new(&puzzle, &words).solve();
//! match result.status {
//!     SolveStatus::Solved(assignment) => {
//!         assert_eq!(assignment.get(&across), Some("CAT"));
//!         assert_eq!(assignment.get(&down), Some("AND"));
//!     }
//!     other => panic!("expected a fill, got {other:?}"),
//! }
//! # Ok::<(), crossfill::errors::PuzzleError>(())
//! ```

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use std::time::Duration;

use instant::Instant;
use log::{debug, info, trace};

use crate::assignment::Assignment;
use crate::domain::Domains;
use crate::interner::Word;
use crate::puzzle::Puzzle;
use crate::variable::{letter_at, word_len, Overlap, Variable};

/// An ordered pair `(x, y)`: "every word left for x needs support in y".
pub type DirectedArc = (Variable, Variable);

/// Knobs for a solver run.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Give up once the search has run this long. `None` searches to completion.
    pub time_limit: Option<Duration>,
}

/// How a solver run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every variable has a word and all crossings agree.
    Solved(Assignment),

    /// The search space was exhausted without finding a fill.
    Unsatisfiable,

    /// The configured time limit ran out first. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Counters collected during a run, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes expanded (partial assignments that were not yet complete).
    pub nodes: usize,
    /// Tentative assignments that were rolled back.
    pub backtracks: usize,
    /// Calls to `revise` that removed at least one word.
    pub revisions: usize,
    /// Words removed by node consistency and arc consistency.
    pub pruned: usize,
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} backtracks, {} revisions, {} words pruned",
            self.nodes, self.backtracks, self.revisions, self.pruned
        )
    }
}

/// Outcome of [`Solver::solve`].
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub status: SolveStatus,
    pub stats: SearchStats,
}

impl SolveResult {
    /// The complete assignment, if one was found.
    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment> {
        match &self.status {
            SolveStatus::Solved(assignment) => Some(assignment),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_assignment(self) -> Option<Assignment> {
        match self.status {
            SolveStatus::Solved(assignment) => Some(assignment),
            _ => None,
        }
    }
}

/// Wall-clock limit checked once per search node.
struct TimeBudget {
    start: Instant,
    limit: Option<Duration>,
}

impl TimeBudget {
    fn new(limit: Option<Duration>) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }
}

/// Result of exploring one subtree.
enum Branch {
    Found(Assignment),
    Exhausted,
    Expired,
}

/// Owns the mutable domain store for one puzzle; the puzzle itself is only borrowed.
pub struct Solver<'p> {
    puzzle: &'p Puzzle,
    domains: Domains,
    config: SolverConfig,
    stats: SearchStats,
    budget: TimeBudget,
}

impl<'p> Solver<'p> {
    /// A solver whose every variable may take any word of `words`.
    #[must_use]
    pub fn new(puzzle: &'p Puzzle, words: &[Word]) -> Self {
        Self::with_config(puzzle, words, SolverConfig::default())
    }

    #[must_use]
    pub fn with_config(puzzle: &'p Puzzle, words: &[Word], config: SolverConfig) -> Self {
        Solver {
            puzzle,
            domains: Domains::seeded(puzzle, words),
            budget: TimeBudget::new(config.time_limit),
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn puzzle(&self) -> &'p Puzzle {
        self.puzzle
    }

    #[must_use]
    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Enforce node and arc consistency, then search for a complete fill.
    pub fn solve(&mut self) -> SolveResult {
        self.budget = TimeBudget::new(self.config.time_limit);

        let before = self.domains.total_size();
        self.enforce_node_consistency();
        debug!(
            "node consistency: {} -> {} candidate words",
            before,
            self.domains.total_size()
        );

        let status = if self.ac3(None) {
            debug!("arc consistency: {} candidate words remain", self.domains.total_size());
            match self.backtrack(Assignment::new()) {
                Branch::Found(assignment) => SolveStatus::Solved(assignment),
                Branch::Exhausted => SolveStatus::Unsatisfiable,
                Branch::Expired => SolveStatus::TimedOut { elapsed: self.budget.elapsed() },
            }
        } else {
            debug!("arc consistency emptied a domain before search");
            SolveStatus::Unsatisfiable
        };

        info!(
            "search finished ({}) in {:.3}s: {}",
            match status {
                SolveStatus::Solved(_) => "solved",
                SolveStatus::Unsatisfiable => "no solution",
                SolveStatus::TimedOut { .. } => "timed out",
            },
            self.budget.elapsed().as_secs_f64(),
            self.stats
        );

        SolveResult { status, stats: self.stats }
    }

    /// Remove every word whose length differs from its variable's length.
    pub fn enforce_node_consistency(&mut self) {
        let puzzle = self.puzzle;
        for v in puzzle.variables() {
            let dropped = self.domains.retain(v, |w| word_len(w) == v.length);
            self.stats.pruned += dropped;
        }
        debug_assert!(
            self.domains
                .iter()
                .all(|(v, words)| words.iter().all(|w| word_len(w) == v.length)),
            "node consistency must leave only words of the right length"
        );
    }

    /// Make `x` arc consistent with `y`: drop each word of `x` that has no word in `y`
    /// agreeing with it on their shared cell.
    ///
    /// Returns whether anything was removed. Variables that do not cross are left alone.
    pub fn revise(&mut self, x: &Variable, y: &Variable) -> bool {
        if x == y {
            return false;
        }
        let Some(Overlap { first, second }) = self.puzzle.overlap(x, y) else {
            return false;
        };
        let Some(ys) = self.domains.get(y) else {
            return false;
        };

        // A word of x is supported iff its letter at `first` is one y can offer at `second`.
        let offered: HashSet<char> = ys.iter().filter_map(|w| letter_at(w, second)).collect();
        let dropped = self
            .domains
            .retain(x, |w| letter_at(w, first).is_some_and(|c| offered.contains(&c)));

        if dropped > 0 {
            trace!("revise {x} against {y}: dropped {dropped}");
            self.stats.revisions += 1;
            self.stats.pruned += dropped;
        }
        dropped > 0
    }

    /// Run AC-3 until the worklist drains.
    ///
    /// With `None`, the worklist starts with every arc `(v, neighbor)` in the puzzle.
    /// Otherwise it starts with exactly `arcs`. Arcs are processed first in, first out.
    ///
    /// Returns `false` as soon as some domain becomes empty, `true` otherwise.
    pub fn ac3(&mut self, arcs: Option<Vec<DirectedArc>>) -> bool {
        let puzzle = self.puzzle;
        let mut queue: VecDeque<DirectedArc> = match arcs {
            Some(arcs) => arcs.into(),
            None => puzzle
                .variables()
                .flat_map(|x| puzzle.neighbors(x).map(move |y| (*x, *y)))
                .collect(),
        };

        while let Some((x, y)) = queue.pop_front() {
            if self.revise(&x, &y) {
                if self.domains.is_empty_for(&x) {
                    trace!("ac3: domain of {x} is empty");
                    return false;
                }
                // x shrank, so every other neighbor must be re-checked against it
                queue.extend(puzzle.neighbors(&x).filter(|&&z| z != y).map(|&z| (z, x)));
            }
        }
        true
    }

    /// True iff every variable has a non-empty word.
    #[must_use]
    pub fn assignment_complete(&self, assignment: &Assignment) -> bool {
        assignment.len() == self.puzzle.len()
            && self
                .puzzle
                .variables()
                .all(|v| assignment.get(v).is_some_and(|w| !w.is_empty()))
    }

    /// True iff every assigned word has its variable's length and every pair of assigned
    /// crossing variables agrees on the shared letter.
    #[must_use]
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        assignment.iter().all(|(v, word)| {
            word_len(word) == v.length
                && self.puzzle.neighbors(v).all(|n| {
                    match (assignment.get(n), self.puzzle.overlap(v, n)) {
                        (Some(other), Some(Overlap { first, second })) => matches!(
                            (letter_at(word, first), letter_at(other, second)),
                            (Some(a), Some(b)) if a == b
                        ),
                        _ => true,
                    }
                })
        })
    }

    /// The unassigned variable with the fewest remaining words; ties go to the one with
    /// the most crossings, then to the first in variable order.
    #[must_use]
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<Variable> {
        self.puzzle
            .variables()
            .filter(|v| !assignment.contains(v))
            .min_by_key(|v| (self.domains.size(v), Reverse(self.puzzle.degree(v))))
            .copied()
    }

    /// The words of `var`, ordered by how many words each would rule out among the
    /// unassigned neighbors (fewest first). Equal counts keep domain order.
    #[must_use]
    pub fn order_domain_values(&self, var: &Variable, assignment: &Assignment) -> Vec<Word> {
        let Some(candidates) = self.domains.get(var) else {
            return Vec::new();
        };

        // For each unassigned neighbor: our index into the shared cell, the neighbor's
        // domain size, and how many of its words carry each letter there.
        let crossings: Vec<(usize, usize, HashMap<char, usize>)> = self
            .puzzle
            .neighbors(var)
            .filter(|n| !assignment.contains(n))
            .filter_map(|n| {
                let overlap = self.puzzle.overlap(var, n)?;
                let words = self.domains.get(n)?;
                let mut letters: HashMap<char, usize> = HashMap::new();
                for w in words {
                    if let Some(c) = letter_at(w, overlap.second) {
                        *letters.entry(c).or_default() += 1;
                    }
                }
                Some((overlap.first, words.len(), letters))
            })
            .collect();

        let mut scored: Vec<(usize, Word)> = candidates
            .iter()
            .map(|w| {
                let ruled_out: usize = crossings
                    .iter()
                    .map(|(idx, total, letters)| {
                        let kept = letter_at(w, *idx).and_then(|c| letters.get(&c)).copied().unwrap_or(0);
                        total - kept
                    })
                    .sum();
                (ruled_out, Rc::clone(w))
            })
            .collect();

        scored.sort_by_key(|(ruled_out, _)| *ruled_out);
        scored.into_iter().map(|(_, w)| w).collect()
    }

    fn backtrack(&mut self, assignment: Assignment) -> Branch {
        if self.assignment_complete(&assignment) {
            debug_assert!(self.consistent(&assignment), "complete assignment must be consistent");
            return Branch::Found(assignment);
        }
        if self.budget.expired() {
            return Branch::Expired;
        }
        self.stats.nodes += 1;

        let Some(var) = self.select_unassigned_variable(&assignment) else {
            return Branch::Exhausted;
        };
        trace!(
            "depth {}: {var} with {} candidates",
            assignment.len(),
            self.domains.size(&var)
        );

        let puzzle = self.puzzle;
        for value in self.order_domain_values(&var, &assignment) {
            let extended = assignment.with(var, Rc::clone(&value));
            let snapshot = self.domains.snapshot();

            // Commit var to this word inside the snapshot, then push the effect one hop out.
            self.domains.retain(&var, |w| w == &*value);
            let arcs: Vec<DirectedArc> = puzzle.neighbors(&var).map(|&n| (n, var)).collect();

            if self.ac3(Some(arcs)) && self.consistent(&extended) {
                match self.backtrack(extended) {
                    Branch::Exhausted => {}
                    done => return done,
                }
            }

            self.stats.backtracks += 1;
            self.domains.restore(snapshot);
        }

        Branch::Exhausted
    }
}

/// Solve `puzzle` over `words` in one call.
#[must_use]
pub fn solve_puzzle(puzzle: &Puzzle, words: &[Word], config: SolverConfig) -> SolveResult {
    Solver::with_config(puzzle, words, config).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interner::intern;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(intern).collect()
    }

    fn sorted(set: Option<&crate::domain::WordSet>) -> Vec<String> {
        set.map(|s| s.iter().map(|w| w.to_string()).collect()).unwrap_or_default()
    }

    /// A (0,0) across and B (0,1) down, crossing at A[1] / B[0]
    fn crossing_pair() -> (Puzzle, Variable, Variable) {
        let a = Variable::across(0, 0, 3);
        let b = Variable::down(0, 1, 3);
        let puzzle = Puzzle::new([a, b], [((a, b), Overlap::new(1, 0))]).unwrap();
        (puzzle, a, b)
    }

    #[test]
    fn test_node_consistency_filters_by_length() {
        let (puzzle, a, b) = crossing_pair();
        let vocab = words(&["CAT", "DOGS", "AN", "TEN"]);
        let mut solver = Solver::new(&puzzle, &vocab);

        solver.enforce_node_consistency();

        for v in [a, b] {
            assert_eq!(sorted(solver.domains().get(&v)), vec!["CAT", "TEN"]);
        }
        assert_eq!(solver.stats().pruned, 4);
    }

    #[test]
    fn test_node_consistency_keeps_everything_when_lengths_match() {
        let (puzzle, a, _) = crossing_pair();
        let vocab = words(&["CAT", "DOG", "TEN", "AND"]);
        let mut solver = Solver::new(&puzzle, &vocab);
        solver.enforce_node_consistency();
        assert_eq!(solver.domains().size(&a), 4);
    }

    #[test]
    fn test_revise_removes_unsupported_words() {
        let (puzzle, a, b) = crossing_pair();
        let vocab = words(&["CAT", "DOG", "TEN", "AND"]);
        let mut solver = Solver::new(&puzzle, &vocab);
        solver.enforce_node_consistency();

        // B can start with C, D, T, A; only CAT has one of those in the middle
        assert!(solver.revise(&a, &b));
        assert_eq!(sorted(solver.domains().get(&a)), vec!["CAT"]);
        // B's domain is not touched by revising A
        assert_eq!(solver.domains().size(&b), 4);
        // nothing more to remove
        assert!(!solver.revise(&a, &b));
    }

    #[test]
    fn test_revise_without_overlap_is_noop() {
        let a = Variable::across(0, 0, 3);
        let c = Variable::across(2, 0, 3);
        let puzzle = Puzzle::new([a, c], []).unwrap();
        let vocab = words(&["CAT", "DOG"]);
        let mut solver = Solver::new(&puzzle, &vocab);

        assert!(!solver.revise(&a, &c));
        assert!(!solver.revise(&a, &a));
        assert_eq!(solver.domains().size(&a), 2);
    }

    #[test]
    fn test_ac3_converges_on_example() {
        let (puzzle, a, b) = crossing_pair();
        let vocab = words(&["CAT", "DOG", "TEN", "AND"]);
        let mut solver = Solver::new(&puzzle, &vocab);
        solver.enforce_node_consistency();

        assert!(solver.ac3(None));
        assert_eq!(sorted(solver.domains().get(&a)), vec!["CAT"]);
        assert_eq!(sorted(solver.domains().get(&b)), vec!["AND"]);
    }

    #[test]
    fn test_ac3_reports_empty_domain() {
        let (puzzle, _, _) = crossing_pair();
        // middle letters B/Y never match first letters A/X
        let vocab = words(&["ABC", "XYZ"]);
        let mut solver = Solver::new(&puzzle, &vocab);
        solver.enforce_node_consistency();

        assert!(!solver.ac3(None));
    }

    #[test]
    fn test_ac3_fixpoint_is_idempotent() {
        // a 3x3 frame: two across, two down
        let vars = [
            Variable::across(0, 0, 3),
            Variable::across(2, 0, 3),
            Variable::down(0, 0, 3),
            Variable::down(0, 2, 3),
        ];
        let puzzle = Puzzle::from_variables(vars).unwrap();
        let vocab = words(&["CAT", "COT", "TAN", "TEN", "NAP", "ANT", "CUT", "TOP"]);
        let mut solver = Solver::new(&puzzle, &vocab);
        solver.enforce_node_consistency();
        assert!(solver.ac3(None));

        for x in puzzle.variables() {
            for y in puzzle.neighbors(x) {
                assert!(!solver.revise(x, y), "revise({x}, {y}) removed words after fixpoint");
            }
        }
    }

    #[test]
    fn test_ac3_with_explicit_arcs_only_touches_those() {
        let (puzzle, a, b) = crossing_pair();
        let vocab = words(&["CAT", "DOG", "TEN", "AND"]);
        let mut solver = Solver::new(&puzzle, &vocab);
        solver.enforce_node_consistency();

        // (b, a): B keeps words starting with a middle letter of A: A, O, E, N
        assert!(solver.ac3(Some(vec![(b, a)])));
        assert_eq!(sorted(solver.domains().get(&b)), vec!["AND"]);
        // b shrank, but a has no other neighbor than b, so a is untouched
        assert_eq!(solver.domains().size(&a), 4);
    }

    #[test]
    fn test_assignment_complete() {
        let (puzzle, a, b) = crossing_pair();
        let vocab = words(&["CAT", "AND"]);
        let solver = Solver::new(&puzzle, &vocab);

        let partial = Assignment::new().with(a, intern("CAT"));
        assert!(!solver.assignment_complete(&partial));
        assert!(!solver.assignment_complete(&Assignment::new()));

        let full = partial.with(b, intern("AND"));
        assert!(solver.assignment_complete(&full));

        let blank = partial.with(b, intern(""));
        assert!(!solver.assignment_complete(&blank));
    }

    #[test]
    fn test_consistent() {
        let (puzzle, a, b) = crossing_pair();
        let vocab = words(&["CAT", "AND"]);
        let solver = Solver::new(&puzzle, &vocab);

        assert!(solver.consistent(&Assignment::new()));
        assert!(solver.consistent(&Assignment::new().with(a, intern("CAT"))));
        assert!(solver.consistent(&Assignment::new().with(a, intern("CAT")).with(b, intern("AND"))));
        // A[1] = 'A' but B[0] = 'D'
        assert!(!solver.consistent(&Assignment::new().with(a, intern("CAT")).with(b, intern("DOG"))));
        // wrong length
        assert!(!solver.consistent(&Assignment::new().with(a, intern("CATS"))));
    }

    #[test]
    fn test_select_prefers_smallest_domain_then_degree() {
        // hub crosses both spokes; spokes cross only the hub
        let hub = Variable::across(1, 0, 3);
        let left = Variable::down(0, 0, 3);
        let right = Variable::down(0, 2, 3);
        let puzzle = Puzzle::from_variables([hub, left, right]).unwrap();
        let vocab = words(&["ABC", "DEF"]);
        let mut solver = Solver::new(&puzzle, &vocab);

        // equal domains: the hub has the highest degree
        assert_eq!(solver.select_unassigned_variable(&Assignment::new()), Some(hub));

        // a smaller domain wins over degree
        solver.domains.remove(&right, "ABC");
        assert_eq!(solver.select_unassigned_variable(&Assignment::new()), Some(right));

        // assigned variables are skipped
        let assigned = Assignment::new().with(right, intern("DEF"));
        assert_eq!(solver.select_unassigned_variable(&assigned), Some(hub));

        let all = assigned.with(hub, intern("ABC")).with(left, intern("ABC"));
        assert_eq!(solver.select_unassigned_variable(&all), None);
    }

    #[test]
    fn test_select_is_deterministic_on_ties() {
        let a = Variable::across(0, 0, 3);
        let c = Variable::across(2, 0, 3);
        let puzzle = Puzzle::from_variables([c, a]).unwrap();
        let vocab = words(&["CAT"]);
        let solver = Solver::new(&puzzle, &vocab);
        for _ in 0..3 {
            assert_eq!(solver.select_unassigned_variable(&Assignment::new()), Some(a));
        }
    }

    #[test]
    fn test_order_domain_values_least_constraining_first() {
        let (puzzle, a, b) = crossing_pair();
        // B's first letters: A, A, A, T
        let vocab = words(&["TAN", "STY", "ARE", "ATE", "AXE", "TOE"]);
        let mut solver = Solver::new(&puzzle, &vocab);
        solver.domains.retain(&a, |w| ["TAN", "STY"].contains(&w));
        solver.domains.retain(&b, |w| ["ARE", "ATE", "AXE", "TOE"].contains(&w));

        // TAN (middle A) rules out only TOE; STY (middle T) rules out three
        let order = solver.order_domain_values(&a, &Assignment::new());
        assert_eq!(order.iter().map(AsRef::as_ref).collect::<Vec<&str>>(), vec!["TAN", "STY"]);
    }

    #[test]
    fn test_order_domain_values_ignores_assigned_neighbors() {
        let (puzzle, a, b) = crossing_pair();
        let vocab = words(&["STY", "TAN", "ARE", "TOE"]);
        let mut solver = Solver::new(&puzzle, &vocab);
        solver.enforce_node_consistency();
        solver.domains.retain(&a, |w| ["STY", "TAN"].contains(&w));

        // with b assigned, nothing is ruled out and domain order is kept
        let assigned = Assignment::new().with(b, intern("ARE"));
        let order = solver.order_domain_values(&a, &assigned);
        assert_eq!(order.iter().map(AsRef::as_ref).collect::<Vec<&str>>(), vec!["STY", "TAN"]);
    }

    #[test]
    fn test_solve_example_pair() {
        let (puzzle, a, b) = crossing_pair();
        let vocab = words(&["CAT", "DOG", "TEN", "AND"]);
        let result = Solver::new(&puzzle, &vocab).solve();

        let assignment = result.assignment().expect("example pair is solvable");
        assert_eq!(assignment.get(&a), Some("CAT"));
        assert_eq!(assignment.get(&b), Some("AND"));
    }

    #[test]
    fn test_solve_reports_unsatisfiable() {
        let (puzzle, _, _) = crossing_pair();
        let vocab = words(&["ABC", "XYZ"]);
        let result = Solver::new(&puzzle, &vocab).solve();
        assert_eq!(result.status, SolveStatus::Unsatisfiable);
        assert!(result.into_assignment().is_none());
    }

    #[test]
    fn test_isolated_variable_with_no_matching_words() {
        let v = Variable::across(0, 0, 5);
        let puzzle = Puzzle::new([v], []).unwrap();
        let vocab = words(&["CAT", "DOG"]);
        let result = Solver::new(&puzzle, &vocab).solve();
        assert_eq!(result.status, SolveStatus::Unsatisfiable);
    }

    #[test]
    fn test_empty_vocabulary() {
        let v = Variable::across(0, 0, 3);
        let puzzle = Puzzle::new([v], []).unwrap();
        let result = Solver::new(&puzzle, &[]).solve();
        assert_eq!(result.status, SolveStatus::Unsatisfiable);
    }

    #[test]
    fn test_empty_puzzle_is_trivially_solved() {
        let puzzle = Puzzle::default();
        let result = Solver::new(&puzzle, &words(&["CAT"])).solve();
        assert_eq!(result.assignment().map(Assignment::len), Some(0));
    }

    #[test]
    fn test_solve_three_variable_chain() {
        // A (across) crosses B (down) at A[2]/B[0] and C (down) at A[0]/C[0].
        // B and C both need a word starting with the letter A gives them.
        let a = Variable::across(0, 0, 3);
        let c = Variable::down(0, 0, 3);
        let b = Variable::down(0, 2, 3);
        let puzzle = Puzzle::from_variables([a, b, c]).unwrap();
        let vocab = words(&["XAY", "ZOO", "ZAP", "OAK", "PEA"]);
        let result = Solver::new(&puzzle, &vocab).solve();

        let assignment = result.assignment().expect("solvable");
        let solver = Solver::new(&puzzle, &vocab);
        assert!(solver.assignment_complete(assignment));
        assert!(solver.consistent(assignment));
        let across = assignment.get(&a).unwrap();
        assert_eq!(across.chars().next(), assignment.get(&c).unwrap().chars().next());
        assert_eq!(across.chars().nth(2), assignment.get(&b).unwrap().chars().next());
    }

    #[test]
    fn test_zero_time_limit_times_out() {
        let (puzzle, _, _) = crossing_pair();
        let vocab = words(&["CAT", "DOG", "TEN", "AND"]);
        let config = SolverConfig { time_limit: Some(Duration::ZERO) };
        let result = solve_puzzle(&puzzle, &vocab, config);
        assert!(matches!(result.status, SolveStatus::TimedOut { .. }));
    }

    #[test]
    fn test_failed_branches_restore_domains() {
        let (puzzle, a, b) = crossing_pair();
        let vocab = words(&["ABC", "XYZ"]);
        let mut solver = Solver::new(&puzzle, &vocab);
        solver.enforce_node_consistency();
        let before = solver.domains().clone();

        // skip initial AC-3 so the search itself has to fail and roll back
        assert!(matches!(solver.backtrack(Assignment::new()), Branch::Exhausted));
        assert_eq!(solver.domains(), &before);
        assert!(solver.stats().backtracks > 0);
        assert_eq!(solver.domains().size(&a), 2);
        assert_eq!(solver.domains().size(&b), 2);
    }
}
