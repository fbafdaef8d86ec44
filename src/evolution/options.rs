//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of an evolution
//! run: board dimension, population size, termination bounds, mutation
//! probability, and elitism count.
//!
//! Options are validated once, before the first generation runs, so the
//! engine never discovers a bad parameter mid-run.
//!
//! ## Example
//!
//! ```rust
//! use queens_gambit::evolution::options::EvolutionOptions;
//!
//! let options = EvolutionOptions::builder()
//!     .board_size(8)
//!     .population_size(100)
//!     .max_generations(1000)
//!     .num_elites(10)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```

use crate::error::{GeneticError, Result};

/// Configuration options for an evolution run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    /// The board dimension N; individuals carry N genes.
    board_size: usize,
    /// The number of individuals in each generation.
    population_size: usize,
    /// The clash count at which the search stops early.
    fitness_limit: u32,
    /// The probability that a child is mutated.
    mutation_probability: f64,
    /// The maximum number of generations before giving up.
    max_generations: usize,
    /// The number of best individuals carried unchanged into the next generation.
    num_elites: usize,
}

impl EvolutionOptions {
    pub fn new(
        board_size: usize,
        population_size: usize,
        fitness_limit: u32,
        mutation_probability: f64,
        max_generations: usize,
        num_elites: usize,
    ) -> Self {
        Self {
            board_size,
            population_size,
            fitness_limit,
            mutation_probability,
            max_generations,
            num_elites,
        }
    }

    pub fn get_board_size(&self) -> usize {
        self.board_size
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_fitness_limit(&self) -> u32 {
        self.fitness_limit
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_num_elites(&self) -> usize {
        self.num_elites
    }

    /// Sets the board dimension.
    pub fn set_board_size(&mut self, board_size: usize) {
        self.board_size = board_size;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the maximum number of generations.
    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    /// Checks the options for consistency.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` when the board is smaller than
    /// 2×2, the population holds fewer than 2 individuals, the mutation
    /// probability falls outside `[0, 1]`, or elitism would fill the entire
    /// next generation.
    pub fn validate(&self) -> Result<()> {
        if self.board_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Board size must be at least 2, got {}",
                self.board_size
            )));
        }

        if self.population_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }

        if self.num_elites >= self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Number of elites ({}) must be less than the population size ({})",
                self.num_elites, self.population_size
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use queens_gambit::evolution::options::EvolutionOptions;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .board_size(15)
    ///     .population_size(200)
    ///     .mutation_probability(0.2)
    ///     .build();
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            board_size: 8,
            population_size: 100,
            fitness_limit: 0,
            mutation_probability: 0.3,
            max_generations: 1000,
            num_elites: 10,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances;
/// unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    board_size: Option<usize>,
    population_size: Option<usize>,
    fitness_limit: Option<u32>,
    mutation_probability: Option<f64>,
    max_generations: Option<usize>,
    num_elites: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the board dimension.
    pub fn board_size(mut self, value: usize) -> Self {
        self.board_size = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the fitness limit for early termination.
    pub fn fitness_limit(mut self, value: u32) -> Self {
        self.fitness_limit = Some(value);
        self
    }

    /// Sets the mutation probability.
    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Sets the maximum number of generations.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets the number of elites.
    pub fn num_elites(mut self, value: usize) -> Self {
        self.num_elites = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            board_size: self.board_size.unwrap_or(defaults.board_size),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            fitness_limit: self.fitness_limit.unwrap_or(defaults.fitness_limit),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            num_elites: self.num_elites.unwrap_or(defaults.num_elites),
        }
    }
}
