pub mod builder;
pub mod challenge;
pub mod engine;
pub mod options;

pub use builder::EvolutionBuilder;
pub use challenge::Challenge;
pub use engine::{Evolution, EvolutionResult, GenerationStats};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
