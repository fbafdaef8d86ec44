use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for crossover strategies.
///
/// A crossover strategy recombines a pair of parents into a pair of children.
/// Implementations must preserve the permutation invariant: whatever the
/// parents contain, both children are valid permutations of `1..=N`.
///
/// # Examples
///
/// ```
/// use queens_gambit::crossover::{CrossoverStrategy, OrderedCrossover};
/// use queens_gambit::individual::Individual;
/// use queens_gambit::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let parent_a = Individual::random(8, &mut rng);
/// let parent_b = Individual::random(8, &mut rng);
///
/// let crossover = OrderedCrossover;
/// let (child_x, child_y) = crossover
///     .crossover((&parent_a, &parent_b), &mut rng)
///     .unwrap();
/// assert_eq!(child_x.len(), 8);
/// assert_eq!(child_y.len(), 8);
/// ```
pub trait CrossoverStrategy: Debug + Send + Sync {
    /// Produces two children from the given pair of parents.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parents have different lengths
    /// - The parents are too short for the strategy's split scheme
    fn crossover(
        &self,
        parents: (&Individual, &Individual),
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)>;
}
