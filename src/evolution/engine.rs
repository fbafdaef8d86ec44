use tracing::{debug, info};

use super::challenge::Challenge;
use super::options::EvolutionOptions;
use crate::crossover::CrossoverStrategy;
use crate::error::{GeneticError, OptionExt, Result};
use crate::individual::{generate_population, Individual};
use crate::mutation::MutationStrategy;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// Represents the result of an evolution run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult {
    /// The best individual of the final population.
    pub individual: Individual,
    /// The clash count of that individual.
    pub score: u32,
    /// The number of generation transitions executed before termination.
    pub generations: usize,
}

/// A per-generation observation emitted while the evolution runs.
///
/// Consumers that want to chart or log convergence subscribe to these through
/// [`Evolution::run_with_observer`]; the engine itself has no dependency on
/// any rendering.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// The zero-based index of the evaluated generation.
    pub generation: usize,
    /// The lowest clash count in that generation.
    pub best_score: u32,
}

/// Manages the evolution process using the strategies composed at
/// construction time.
///
/// The engine owns the population exclusively for the duration of a run and
/// threads a single caller-supplied random source through every strategy
/// call, so two runs with the same seed and options produce the same result.
///
/// # Example
///
/// ```rust
/// use queens_gambit::crossover::OrderedCrossover;
/// use queens_gambit::evolution::{Evolution, EvolutionOptions};
/// use queens_gambit::fitness::DiagonalClashes;
/// use queens_gambit::mutation::SwapMutation;
/// use queens_gambit::rng::RandomNumberGenerator;
/// use queens_gambit::selection::RouletteWheelSelection;
///
/// let engine = Evolution::new(
///     RouletteWheelSelection::new(),
///     OrderedCrossover,
///     SwapMutation,
///     DiagonalClashes,
/// );
///
/// let options = EvolutionOptions::builder()
///     .board_size(4)
///     .population_size(20)
///     .max_generations(50)
///     .num_elites(2)
///     .build();
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let result = engine.run(&options, &mut rng).unwrap();
/// assert_eq!(result.individual.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Evolution<S, C, M, F>
where
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
    F: Challenge,
{
    selection: S,
    crossover: C,
    mutation: M,
    challenge: F,
}

impl<S, C, M, F> Evolution<S, C, M, F>
where
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
    F: Challenge,
{
    /// Creates a new engine from the four strategies.
    ///
    /// The strategies are fixed for the lifetime of the engine; swapping one
    /// means constructing a new engine.
    pub fn new(selection: S, crossover: C, mutation: M, challenge: F) -> Self {
        Self {
            selection,
            crossover,
            mutation,
            challenge,
        }
    }

    /// Runs the evolution until the fitness limit or the generation budget is
    /// reached.
    ///
    /// A run that exhausts the generation budget without reaching the fitness
    /// limit is not an error; the best individual found so far is returned.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` when the options fail
    /// validation. No error is produced mid-run once validation has passed.
    pub fn run(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.run_with_observer(options, rng, |_| {})
    }

    /// Runs the evolution, invoking `observer` once per evaluated generation.
    ///
    /// The observer receives the generation index and the best clash count of
    /// the generation, including the final one that met the fitness limit.
    /// With `max_generations` set to 0 the observer is never called and the
    /// best individual of the initial random population is returned.
    pub fn run_with_observer<O>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        mut observer: O,
    ) -> Result<EvolutionResult>
    where
        O: FnMut(GenerationStats),
    {
        options.validate()?;

        info!(
            board_size = options.get_board_size(),
            population_size = options.get_population_size(),
            max_generations = options.get_max_generations(),
            "starting evolution"
        );

        let mut population = generate_population(
            options.get_population_size(),
            options.get_board_size(),
            rng,
        );
        let mut generations = 0;

        for generation in 0..options.get_max_generations() {
            let scores = self.rank(&mut population);
            let best_score = scores[0];

            debug!(generation, best_score, "generation evaluated");
            observer(GenerationStats {
                generation,
                best_score,
            });

            if best_score <= options.get_fitness_limit() {
                break;
            }

            population = self.next_generation(&population, &scores, options, rng)?;
            generations = generation + 1;
        }

        self.rank(&mut population);
        let individual = population
            .first()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let score = self.challenge.score(&individual);

        info!(score, generations, "evolution finished");

        Ok(EvolutionResult {
            individual,
            score,
            generations,
        })
    }

    /// Sorts the population ascending by clash count and returns the scores
    /// in the same order.
    fn rank(&self, population: &mut Vec<Individual>) -> Vec<u32> {
        let mut scored: Vec<(u32, Individual)> = population
            .drain(..)
            .map(|individual| (self.challenge.score(&individual), individual))
            .collect();
        scored.sort_by_key(|(score, _)| *score);

        let mut scores = Vec::with_capacity(scored.len());
        *population = scored
            .into_iter()
            .map(|(score, individual)| {
                scores.push(score);
                individual
            })
            .collect();
        scores
    }

    /// Derives the next generation from a population pre-sorted by `rank`.
    ///
    /// The top `num_elites` individuals are carried over unchanged, so the
    /// best score never worsens between generations. The remaining slots are
    /// filled pairwise through selection, crossover, and mutation. When the
    /// number of open slots is odd, the second child of the final pair is
    /// dropped and the population size stays constant.
    fn next_generation(
        &self,
        population: &[Individual],
        scores: &[u32],
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let target_size = population.len();
        let mut next: Vec<Individual> = population[..options.get_num_elites()].to_vec();

        while next.len() < target_size {
            let (parent_a, parent_b) = self.selection.select_parents(population, scores, rng)?;
            let (mut child_x, mut child_y) = self.crossover.crossover((&parent_a, &parent_b), rng)?;

            self.mutation
                .mutate(&mut child_x, options.get_mutation_probability(), rng);
            self.mutation
                .mutate(&mut child_y, options.get_mutation_probability(), rng);

            next.push(child_x);
            if next.len() < target_size {
                next.push(child_y);
            }
        }

        Ok(next)
    }
}
