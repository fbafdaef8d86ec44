use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

use super::mutation_strategy::MutationStrategy;

/// Swap mutation: with the given probability, two positions are drawn
/// uniformly with replacement and their genes exchanged.
///
/// Drawing the same position twice is allowed and leaves the individual
/// unchanged. A swap can never duplicate or drop a gene, so the permutation
/// invariant holds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct SwapMutation;

impl MutationStrategy for SwapMutation {
    fn mutate(
        &self,
        individual: &mut Individual,
        probability: f64,
        rng: &mut RandomNumberGenerator,
    ) {
        if rng.fetch_probability() <= probability {
            let pos1 = rng.fetch_index(individual.len());
            let pos2 = rng.fetch_index(individual.len());
            individual.swap(pos1, pos2);
        }
    }
}
