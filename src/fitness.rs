//! # Fitness Evaluation
//!
//! Scoring for N-Queens candidates. The score is a cost: the number of
//! unordered queen pairs attacking each other along a diagonal. A score of 0
//! is a perfect placement. Same-row and same-column attacks cannot occur
//! under the permutation encoding, so diagonals are the only thing counted.

use crate::evolution::challenge::Challenge;
use crate::individual::Individual;

/// The N-Queens fitness evaluator.
///
/// Counts the pairwise diagonal clashes of an individual. Two queens in
/// columns `i < j` clash when `|genes[j] - genes[i]| == j - i`. Evaluation is
/// quadratic in the board dimension and dominates the cost of a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct DiagonalClashes;

impl Challenge for DiagonalClashes {
    fn score(&self, individual: &Individual) -> u32 {
        let genes = individual.genes();
        let mut clashes = 0;
        for i in 0..genes.len() {
            for j in (i + 1)..genes.len() {
                let row_distance = genes[j].abs_diff(genes[i]);
                if row_distance as usize == j - i {
                    clashes += 1;
                }
            }
        }
        clashes
    }
}

/// The maximum possible clash count for an N×N board.
///
/// Every pair of queens clashing at once gives `N * (N - 1) / 2`, reached by
/// the canonical placement `[1, 2, ..., N]` along the main diagonal.
pub fn max_clashes(length: usize) -> u32 {
    (length * (length.saturating_sub(1)) / 2) as u32
}
