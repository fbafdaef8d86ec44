pub mod crossover_strategy;
pub mod ordered;

pub use crossover_strategy::CrossoverStrategy;
pub use ordered::OrderedCrossover;
