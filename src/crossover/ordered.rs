use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

use super::crossover_strategy::CrossoverStrategy;

/// Order-preserving crossover for permutation individuals.
///
/// A split index `k` is drawn uniformly from `[1, N-1]`. The first child
/// takes the first `k` genes of parent A, followed by parent B's genes in
/// their original relative order, skipping any gene already present in the
/// prefix. The second child is built the same way with the parents' roles
/// swapped. No gene can be duplicated or lost, so both children are valid
/// permutations regardless of the parents' contents.
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
/// let (child_x, child_y) = OrderedCrossover
///     .crossover((&parent_a, &parent_b), &mut rng)
///     .unwrap();
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct OrderedCrossover;

impl OrderedCrossover {
    /// Builds one child: the prefix of `prefix_parent` up to `split_index`,
    /// completed by the unused genes of `order_parent` in order.
    fn offspring(
        prefix_parent: &Individual,
        order_parent: &Individual,
        split_index: usize,
    ) -> Individual {
        let length = prefix_parent.len();
        let prefix = &prefix_parent.genes()[..split_index];

        let mut in_prefix = vec![false; length];
        for &gene in prefix {
            in_prefix[(gene - 1) as usize] = true;
        }

        let mut genes = Vec::with_capacity(length);
        genes.extend_from_slice(prefix);
        genes.extend(
            order_parent
                .genes()
                .iter()
                .copied()
                .filter(|&gene| !in_prefix[(gene - 1) as usize]),
        );

        Individual::from_genes_unchecked(genes)
    }
}

impl CrossoverStrategy for OrderedCrossover {
    fn crossover(
        &self,
        (parent_a, parent_b): (&Individual, &Individual),
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        if parent_a.len() != parent_b.len() {
            return Err(GeneticError::Crossover(format!(
                "Parents must have the same length, got {} and {}",
                parent_a.len(),
                parent_b.len()
            )));
        }

        let length = parent_a.len();
        if length < 2 {
            return Err(GeneticError::Crossover(format!(
                "Parents must carry at least 2 genes, got {}",
                length
            )));
        }

        // Split index is uniform in [1, N-1]: both sides stay non-empty.
        let split_index = rng.fetch_index(length - 1) + 1;

        let child_x = Self::offspring(parent_a, parent_b, split_index);
        let child_y = Self::offspring(parent_b, parent_a, split_index);

        Ok((child_x, child_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(individual: &Individual) -> bool {
        let n = individual.len();
        let mut seen = vec![false; n];
        for &gene in individual.genes() {
            if gene == 0 || gene > n as u32 || seen[(gene - 1) as usize] {
                return false;
            }
            seen[(gene - 1) as usize] = true;
        }
        true
    }

    #[test]
    fn test_offspring_takes_prefix_then_order() {
        let parent_a = Individual::from_genes(vec![1, 2, 3, 4, 5]).unwrap();
        let parent_b = Individual::from_genes(vec![5, 4, 3, 2, 1]).unwrap();

        let child = OrderedCrossover::offspring(&parent_a, &parent_b, 2);
        assert_eq!(child.genes(), &[1, 2, 5, 4, 3]);

        let child = OrderedCrossover::offspring(&parent_b, &parent_a, 2);
        assert_eq!(child.genes(), &[5, 4, 1, 2, 3]);
    }

    #[test]
    fn test_children_are_permutations_over_many_trials() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for length in [2, 4, 8, 15] {
            for _ in 0..100 {
                let parent_a = Individual::random(length, &mut rng);
                let parent_b = Individual::random(length, &mut rng);

                let (child_x, child_y) = OrderedCrossover
                    .crossover((&parent_a, &parent_b), &mut rng)
                    .unwrap();

                assert_eq!(child_x.len(), length);
                assert_eq!(child_y.len(), length);
                assert!(is_permutation(&child_x));
                assert!(is_permutation(&child_y));
            }
        }
    }

    #[test]
    fn test_identical_parents_reproduce_themselves() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let parent = Individual::from_genes(vec![3, 1, 4, 2]).unwrap();

        let (child_x, child_y) = OrderedCrossover
            .crossover((&parent, &parent), &mut rng)
            .unwrap();

        assert_eq!(child_x, parent);
        assert_eq!(child_y, parent);
    }

    #[test]
    fn test_rejects_mismatched_parent_lengths() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let parent_a = Individual::from_genes(vec![1, 2, 3]).unwrap();
        let parent_b = Individual::from_genes(vec![2, 1]).unwrap();

        let result = OrderedCrossover.crossover((&parent_a, &parent_b), &mut rng);
        assert!(matches!(result, Err(GeneticError::Crossover(_))));
    }

    #[test]
    fn test_rejects_single_gene_parents() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let parent = Individual::from_genes(vec![1]).unwrap();

        let result = OrderedCrossover.crossover((&parent, &parent), &mut rng);
        assert!(matches!(result, Err(GeneticError::Crossover(_))));
    }

    #[test]
    fn test_minimum_length_parents() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let parent_a = Individual::from_genes(vec![1, 2]).unwrap();
        let parent_b = Individual::from_genes(vec![2, 1]).unwrap();

        // The only possible split index is 1.
        let (child_x, child_y) = OrderedCrossover
            .crossover((&parent_a, &parent_b), &mut rng)
            .unwrap();

        assert_eq!(child_x.genes(), &[1, 2]);
        assert_eq!(child_y.genes(), &[2, 1]);
    }
}
