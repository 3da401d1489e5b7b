// Reusable library API: the solver core plus the loaders and renderer the CLI wires together
pub mod assignment;
pub mod domain;
pub mod errors;
pub mod grid;
pub mod interner;
pub mod log;
pub mod puzzle;
pub mod solver;
pub mod structure;
pub mod variable;
pub mod word_list;
