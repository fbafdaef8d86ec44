pub mod crossover;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod individual;
pub mod mutation;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
