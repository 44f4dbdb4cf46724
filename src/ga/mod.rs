//! Genetic algorithm components for route ordering.
//!
//! - [`Tour`] — Permutation chromosome with the start fixed in front
//! - [`ordered_crossover`] / [`swap_mutation`] — Start-preserving operators
//! - [`GeneticSolver`] — Generational search with elitism and best tracking

mod chromosome;
mod operators;
mod solver;

pub use chromosome::Tour;
pub use operators::{ordered_crossover, swap_mutation};
pub use solver::{GeneticRun, GeneticSolver};
