use crate::{
    crossover::CrossoverStrategy, error::{GeneticError, Result}, evolution::challenge::Challenge,
    evolution::engine::Evolution, mutation::MutationStrategy, selection::SelectionStrategy,
};

/// Builder for composing an [`Evolution`] engine out of the four strategy
/// seams.
///
/// Every seam must be supplied; `build` fails with a configuration error
/// otherwise.
///
/// # Example
///
/// ```rust
/// use queens_gambit::crossover::OrderedCrossover;
/// use queens_gambit::evolution::EvolutionBuilder;
/// use queens_gambit::fitness::DiagonalClashes;
/// use queens_gambit::mutation::SwapMutation;
/// use queens_gambit::selection::RouletteWheelSelection;
///
/// let engine = EvolutionBuilder::new()
///     .with_selection_strategy(RouletteWheelSelection::new())
///     .with_crossover_strategy(OrderedCrossover)
///     .with_mutation_strategy(SwapMutation)
///     .with_challenge(DiagonalClashes)
///     .build()
///     .unwrap();
/// ```
pub struct EvolutionBuilder<S, C, M, F>
where
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
    F: Challenge,
{
    selection_strategy: Option<S>,
    crossover_strategy: Option<C>,
    mutation_strategy: Option<M>,
    challenge: Option<F>,
}

impl<S, C, M, F> EvolutionBuilder<S, C, M, F>
where
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
    F: Challenge,
{
    pub fn new() -> Self {
        Self {
            selection_strategy: None,
            crossover_strategy: None,
            mutation_strategy: None,
            challenge: None,
        }
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_crossover_strategy(mut self, crossover_strategy: C) -> Self {
        self.crossover_strategy = Some(crossover_strategy);
        self
    }

    pub fn with_mutation_strategy(mut self, mutation_strategy: M) -> Self {
        self.mutation_strategy = Some(mutation_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: F) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<Evolution<S, C, M, F>> {
        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let crossover_strategy = self.crossover_strategy.ok_or_else(|| {
            GeneticError::Configuration("Crossover strategy not specified".to_string())
        })?;

        let mutation_strategy = self.mutation_strategy.ok_or_else(|| {
            GeneticError::Configuration("Mutation strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        Ok(Evolution::new(
            selection_strategy,
            crossover_strategy,
            mutation_strategy,
            challenge,
        ))
    }
}

impl<S, C, M, F> Default for EvolutionBuilder<S, C, M, F>
where
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
    F: Challenge,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossover::OrderedCrossover;
    use crate::fitness::DiagonalClashes;
    use crate::mutation::SwapMutation;
    use crate::selection::RouletteWheelSelection;

    #[test]
    fn test_build_with_all_strategies() {
        let result = EvolutionBuilder::new()
            .with_selection_strategy(RouletteWheelSelection::new())
            .with_crossover_strategy(OrderedCrossover)
            .with_mutation_strategy(SwapMutation)
            .with_challenge(DiagonalClashes)
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_build_fails_without_challenge() {
        let result: Result<_> = EvolutionBuilder::<_, _, _, DiagonalClashes>::new()
            .with_selection_strategy(RouletteWheelSelection::new())
            .with_crossover_strategy(OrderedCrossover)
            .with_mutation_strategy(SwapMutation)
            .build();

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
