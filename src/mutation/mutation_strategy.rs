use std::fmt::Debug;

use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for mutation strategies.
///
/// A mutation strategy perturbs a single individual in place with the given
/// probability; with the complementary probability the individual is left
/// untouched. Implementations must preserve the permutation invariant, which
/// every rearranging operation (swaps, shuffles) does trivially. Mutation is
/// infallible: for a validated probability there is nothing that can go
/// wrong.
///
/// # Examples
///
/// ```
/// use queens_gambit::individual::Individual;
/// use queens_gambit::mutation::{MutationStrategy, SwapMutation};
/// use queens_gambit::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let mut individual = Individual::random(8, &mut rng);
///
/// // Probability 1.0: the swap always happens.
/// SwapMutation.mutate(&mut individual, 1.0, &mut rng);
/// assert_eq!(individual.len(), 8);
/// ```
pub trait MutationStrategy: Debug + Send + Sync {
    /// Mutates the individual in place with the given probability.
    ///
    /// # Arguments
    ///
    /// * `individual` - The individual to possibly mutate.
    /// * `probability` - The probability that the mutation takes place,
    ///   validated by the engine to lie within `[0, 1]`.
    /// * `rng` - The random number generator driving the draws.
    fn mutate(
        &self,
        individual: &mut Individual,
        probability: f64,
        rng: &mut RandomNumberGenerator,
    );
}
