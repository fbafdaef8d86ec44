//! Command-line entry point: parses the run parameters, drives the evolution
//! engine, and renders the best placement found as an ASCII board.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use queens_gambit::crossover::OrderedCrossover;
use queens_gambit::evolution::{EvolutionBuilder, EvolutionOptions, EvolutionResult};
use queens_gambit::fitness::DiagonalClashes;
use queens_gambit::individual::Individual;
use queens_gambit::mutation::{MultiSwapMutation, MutationStrategy, ShuffleMutation, SwapMutation};
use queens_gambit::rng::RandomNumberGenerator;
use queens_gambit::selection::RouletteWheelSelection;
use queens_gambit::Result;

#[derive(Parser, Debug)]
#[command(name = "queens-gambit", version, about = "Evolve a placement of N non-attacking queens")]
struct Args {
    /// Population size
    #[arg(short = 'p', long, default_value_t = 100)]
    pop_size: usize,

    /// Chessboard dimension
    #[arg(short = 'n', long, default_value_t = 8)]
    individual_length: usize,

    /// Fitness score to stop the search
    #[arg(short = 'l', long, default_value_t = 0)]
    fitness_limit: u32,

    /// Mutation probability
    #[arg(long, default_value_t = 0.3)]
    mutation_prob: f64,

    /// Maximum number of iterations
    #[arg(long, default_value_t = 1000)]
    n_iter: usize,

    /// Number of elites
    #[arg(long, default_value_t = 10)]
    n_elites: usize,

    /// Seed for the random number generator; omit for an entropy seed
    #[arg(long)]
    seed: Option<u64>,

    /// Mutation strategy
    #[arg(long, value_enum, default_value_t = MutationKind::Swap)]
    mutation: MutationKind,

    /// Weigh parents by max_clashes - score instead of the raw clash count
    #[arg(long)]
    inverted_selection: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MutationKind {
    Swap,
    MultiSwap,
    Shuffle,
}

fn run<M: MutationStrategy>(args: &Args, mutation: M) -> Result<EvolutionResult> {
    let options = EvolutionOptions::builder()
        .board_size(args.individual_length)
        .population_size(args.pop_size)
        .fitness_limit(args.fitness_limit)
        .mutation_probability(args.mutation_prob)
        .max_generations(args.n_iter)
        .num_elites(args.n_elites)
        .build();

    let mut rng = match args.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let selection = if args.inverted_selection {
        RouletteWheelSelection::inverted()
    } else {
        RouletteWheelSelection::new()
    };

    let engine = EvolutionBuilder::new()
        .with_selection_strategy(selection)
        .with_crossover_strategy(OrderedCrossover)
        .with_mutation_strategy(mutation)
        .with_challenge(DiagonalClashes)
        .build()?;

    engine.run_with_observer(&options, &mut rng, |stats| {
        println!(
            "Generation {} - Best fitness {}",
            stats.generation, stats.best_score
        );
    })
}

/// The number of permutation-encoded placements of an N×N board.
///
/// Returns `None` when N! overflows a u128 (boards beyond 34 columns).
fn factorial(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, u128::checked_mul)
}

/// Renders the placement as an ASCII grid, one `[Q]` per column.
fn render_board(individual: &Individual) -> String {
    let mut board = String::new();
    for row in 0..individual.len() as u32 {
        for &gene in individual.genes() {
            board.push_str(if gene - 1 == row { "[Q]" } else { "[ ]" });
        }
        board.push('\n');
    }
    board
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let result = match args.mutation {
        MutationKind::Swap => run(&args, SwapMutation)?,
        MutationKind::MultiSwap => run(&args, MultiSwapMutation::default())?,
        MutationKind::Shuffle => run(&args, ShuffleMutation)?,
    };

    if let Some(count) = factorial(result.individual.len()) {
        println!("\nNumber of possible placements: {}", count);
    }
    println!("Solution: {}", result.individual);
    println!("Clashes: {}\n", result.score);
    print!("{}", render_board(&result.individual));

    if result.score > args.fitness_limit {
        println!(
            "\nNo placement at or below {} clashes found within {} generations; showing the best found.",
            args.fitness_limit, args.n_iter
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(4), Some(24));
        assert_eq!(factorial(8), Some(40320));
        assert!(factorial(35).is_none());
    }

    #[test]
    fn test_render_board_marks_each_queen_once() {
        let individual = Individual::from_genes(vec![2, 4, 1, 3]).unwrap();
        let board = render_board(&individual);

        assert_eq!(
            board,
            "[ ][ ][Q][ ]\n\
             [Q][ ][ ][ ]\n\
             [ ][ ][ ][Q]\n\
             [ ][Q][ ][ ]\n"
        );
    }
}
