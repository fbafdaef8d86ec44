use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

use super::mutation_strategy::MutationStrategy;

/// Shuffle mutation: with the given probability, re-randomizes the whole
/// permutation.
///
/// The most disruptive of the mutation variants; it discards the individual's
/// structure entirely while keeping the gene multiset intact.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ShuffleMutation;

impl MutationStrategy for ShuffleMutation {
    fn mutate(
        &self,
        individual: &mut Individual,
        probability: f64,
        rng: &mut RandomNumberGenerator,
    ) {
        if rng.fetch_probability() <= probability {
            individual.shuffle(rng);
        }
    }
}
