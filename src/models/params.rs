//! Solver selection and genetic algorithm parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// The solver used to order waypoints.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Algorithm;
///
/// let alg: Algorithm = "genetic".parse().unwrap();
/// assert_eq!(alg, Algorithm::Genetic);
/// assert_eq!(Algorithm::NearestNeighbor.to_string(), "nearest");
/// assert!("dijkstra".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Greedy nearest-neighbor construction.
    #[default]
    #[serde(rename = "nearest")]
    NearestNeighbor,
    /// Population-based genetic search.
    #[serde(rename = "genetic")]
    Genetic,
}

impl Algorithm {
    /// Name used to select this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "nearest",
            Algorithm::Genetic => "genetic",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "nearest-neighbor" | "nearest_neighbor" => Ok(Algorithm::NearestNeighbor),
            "genetic" | "ga" => Ok(Algorithm::Genetic),
            _ => Err(RouteError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Tuning parameters for the genetic solver.
///
/// Recommended ranges are 10–500 for the population and 10–1000 for
/// generations; they are not enforced, and degenerate values (zero
/// generations, a population of one) make the solver return its fallback
/// route instead of failing.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::GeneticParams;
///
/// let params = GeneticParams::default()
///     .with_population_size(50)
///     .with_generations(200)
///     .with_elitism_rate(0.2);
/// assert_eq!(params.elite_count(), 10);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneticParams {
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    elitism_rate: f64,
}

impl Default for GeneticParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            mutation_rate: 0.01,
            elitism_rate: 0.1,
        }
    }
}

impl GeneticParams {
    /// Creates parameters from explicit values.
    pub fn new(
        population_size: usize,
        generations: usize,
        mutation_rate: f64,
        elitism_rate: f64,
    ) -> Self {
        Self {
            population_size,
            generations,
            mutation_rate,
            elitism_rate,
        }
    }

    /// Sets the number of candidate routes per generation.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of generations to evolve.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the probability that a child undergoes one swap mutation.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the fraction of the population carried over unchanged.
    pub fn with_elitism_rate(mut self, elitism_rate: f64) -> Self {
        self.elitism_rate = elitism_rate;
        self
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn elitism_rate(&self) -> f64 {
        self.elitism_rate
    }

    /// Number of top-ranked routes copied unchanged into each new generation:
    /// `floor(population_size * elitism_rate)`.
    pub fn elite_count(&self) -> usize {
        let count = (self.population_size as f64 * self.elitism_rate).floor();
        if count <= 0.0 {
            0
        } else {
            (count as usize).min(self.population_size)
        }
    }

    /// Size of the parent pool: the upper half of the ranked population.
    pub fn parent_pool_size(&self) -> usize {
        self.population_size / 2
    }

    /// Checks that both rates are finite and within `[0, 1]`.
    pub fn validate(&self) -> Result<(), RouteError> {
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("elitism_rate", self.elitism_rate)
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), RouteError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RouteError::InvalidParameter { name, value })
    }
}
