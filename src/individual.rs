//! # Individual
//!
//! The [`Individual`] type represents one candidate placement of N queens on
//! an N×N board. It is encoded as a permutation of `1..=N`: the position index
//! is the column and the value is the row of the queen in that column. The
//! permutation encoding structurally rules out same-row and same-column
//! attacks, so only diagonal clashes remain to be scored.
//!
//! ## Example
//!
//! ```rust
//! use queens_gambit::individual::Individual;
//! use queens_gambit::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let individual = Individual::random(8, &mut rng);
//!
//! assert_eq!(individual.len(), 8);
//! ```

use std::fmt;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A candidate solution to the N-Queens problem.
///
/// Invariant: the genes are always a permutation of `1..=N`. Every
/// constructor and operator in the crate preserves this, so consumers never
/// observe a duplicated or missing row.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    genes: Vec<u32>,
}

impl TryFrom<Vec<u32>> for Individual {
    type Error = GeneticError;

    fn try_from(genes: Vec<u32>) -> Result<Self> {
        Self::from_genes(genes)
    }
}

impl From<Individual> for Vec<u32> {
    fn from(individual: Individual) -> Self {
        individual.genes
    }
}

impl Individual {
    /// Generates a uniformly random individual of the given length.
    ///
    /// The genes are a shuffle of `1..=length`, so the permutation invariant
    /// holds by construction.
    pub fn random(length: usize, rng: &mut RandomNumberGenerator) -> Self {
        let mut genes: Vec<u32> = (1..=length as u32).collect();
        rng.shuffle(&mut genes);
        Self { genes }
    }

    /// Builds an individual from explicit genes, validating the permutation
    /// invariant.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the genes are not a
    /// permutation of `1..=N`.
    pub fn from_genes(genes: Vec<u32>) -> Result<Self> {
        let length = genes.len();
        let mut seen = vec![false; length];
        for &gene in &genes {
            let valid = (1..=length as u32).contains(&gene);
            if !valid || seen[(gene - 1) as usize] {
                return Err(GeneticError::Configuration(format!(
                    "Genes must be a permutation of 1..={}, got {:?}",
                    length, genes
                )));
            }
            seen[(gene - 1) as usize] = true;
        }
        Ok(Self { genes })
    }

    /// Builds an individual from genes already known to satisfy the
    /// permutation invariant. Operators that construct children by
    /// rearranging validated genes use this to skip re-validation.
    pub(crate) fn from_genes_unchecked(genes: Vec<u32>) -> Self {
        Self { genes }
    }

    /// Returns the genes as a slice.
    pub fn genes(&self) -> &[u32] {
        &self.genes
    }

    /// Returns the number of genes, which is the board dimension N.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the individual has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Swaps the genes at the two given positions.
    ///
    /// Swapping never duplicates or drops a value, so the permutation
    /// invariant is preserved.
    pub fn swap(&mut self, pos1: usize, pos2: usize) {
        self.genes.swap(pos1, pos2);
    }

    /// Re-shuffles all genes in place.
    pub fn shuffle(&mut self, rng: &mut RandomNumberGenerator) {
        rng.shuffle(&mut self.genes);
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gene) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", gene)?;
        }
        write!(f, "]")
    }
}

/// Generates a population of `pop_size` independently random individuals.
///
/// There is no uniqueness guarantee across individuals; two members of the
/// initial population may encode the same placement.
pub fn generate_population(
    pop_size: usize,
    individual_length: usize,
    rng: &mut RandomNumberGenerator,
) -> Vec<Individual> {
    (0..pop_size)
        .map(|_| Individual::random(individual_length, rng))
        .collect()
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
    fn test_random_individual_is_permutation() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for length in 2..=20 {
            let individual = Individual::random(length, &mut rng);
            assert_eq!(individual.len(), length);
            assert!(is_permutation(&individual));
        }
    }

    #[test]
    fn test_from_genes_accepts_valid_permutation() {
        let individual = Individual::from_genes(vec![2, 4, 1, 3]).unwrap();
        assert_eq!(individual.genes(), &[2, 4, 1, 3]);
    }

    #[test]
    fn test_from_genes_rejects_duplicates() {
        let result = Individual::from_genes(vec![1, 2, 2, 4]);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_from_genes_rejects_out_of_range() {
        let result = Individual::from_genes(vec![0, 1, 2, 3]);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));

        let result = Individual::from_genes(vec![1, 2, 3, 5]);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_swap_preserves_permutation() {
        let mut individual = Individual::from_genes(vec![2, 4, 1, 3]).unwrap();
        individual.swap(0, 3);
        assert_eq!(individual.genes(), &[3, 4, 1, 2]);
        assert!(is_permutation(&individual));
    }

    #[test]
    fn test_generate_population_size_and_validity() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = generate_population(25, 8, &mut rng);

        assert_eq!(population.len(), 25);
        for individual in &population {
            assert_eq!(individual.len(), 8);
            assert!(is_permutation(individual));
        }
    }

    #[test]
    fn test_display() {
        let individual = Individual::from_genes(vec![2, 4, 1, 3]).unwrap();
        assert_eq!(individual.to_string(), "[2, 4, 1, 3]");
    }
}
