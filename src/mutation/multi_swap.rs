use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

use super::mutation_strategy::MutationStrategy;

/// Multi-swap mutation: with the given probability, performs a fixed number
/// of independent position swaps in one go.
///
/// A stronger perturbation than [`super::SwapMutation`] for escaping local
/// optima on larger boards; each constituent swap draws its two positions
/// uniformly with replacement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct MultiSwapMutation {
    /// The number of swaps applied when the mutation fires.
    num_swaps: usize,
}

impl MultiSwapMutation {
    /// Creates a multi-swap mutation performing `num_swaps` swaps.
    pub fn new(num_swaps: usize) -> Self {
        Self { num_swaps }
    }
}

impl Default for MultiSwapMutation {
    fn default() -> Self {
        Self { num_swaps: 5 }
    }
}

impl MutationStrategy for MultiSwapMutation {
    fn mutate(
        &self,
        individual: &mut Individual,
        probability: f64,
        rng: &mut RandomNumberGenerator,
    ) {
        if rng.fetch_probability() <= probability {
            for _ in 0..self.num_swaps {
                let pos1 = rng.fetch_index(individual.len());
                let pos2 = rng.fetch_index(individual.len());
                individual.swap(pos1, pos2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene_multiset(individual: &Individual) -> Vec<u32> {
        let mut genes = individual.genes().to_vec();
        genes.sort_unstable();
        genes
    }

    #[test]
    fn test_mutation_preserves_gene_multiset() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mutation = MultiSwapMutation::default();

        for _ in 0..100 {
            let mut individual = Individual::random(10, &mut rng);
            let before = gene_multiset(&individual);

            mutation.mutate(&mut individual, 1.0, &mut rng);

            assert_eq!(gene_multiset(&individual), before);
        }
    }

    #[test]
    fn test_zero_probability_never_mutates() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let original = Individual::random(8, &mut rng);

        let mut individual = original.clone();
        MultiSwapMutation::new(10).mutate(&mut individual, 0.0, &mut rng);

        assert_eq!(individual, original);
    }

    #[test]
    fn test_zero_swaps_is_a_no_op() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let original = Individual::random(8, &mut rng);

        let mut individual = original.clone();
        MultiSwapMutation::new(0).mutate(&mut individual, 1.0, &mut rng);

        assert_eq!(individual, original);
    }
}
