use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A selection strategy picks the two parents of the next crossover from the
/// current population, using the clash counts computed by the engine. The two
/// draws are independent and with replacement, so both parents may be the
/// same individual.
///
/// # Examples
///
/// ```
/// use queens_gambit::individual::{generate_population, Individual};
/// use queens_gambit::fitness::DiagonalClashes;
/// use queens_gambit::evolution::Challenge;
/// use queens_gambit::rng::RandomNumberGenerator;
/// use queens_gambit::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let population = generate_population(10, 8, &mut rng);
/// let scores: Vec<u32> = population
///     .iter()
///     .map(|individual| DiagonalClashes.score(individual))
///     .collect();
///
/// let selection = RouletteWheelSelection::new();
/// let (parent_a, parent_b) = selection
///     .select_parents(&population, &scores, &mut rng)
///     .unwrap();
/// assert_eq!(parent_a.len(), 8);
/// assert_eq!(parent_b.len(), 8);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects a pair of parents from the population.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population of individuals.
    /// * `scores` - The clash counts corresponding to each individual.
    /// * `rng` - The random number generator driving the draws.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The scores length doesn't match the population length
    fn select_parents(
        &self,
        population: &[Individual],
        scores: &[u32],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)>;
}
