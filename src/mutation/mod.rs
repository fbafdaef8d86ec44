pub mod multi_swap;
pub mod mutation_strategy;
pub mod shuffle;
pub mod swap;

pub use multi_swap::MultiSwapMutation;
pub use mutation_strategy::MutationStrategy;
pub use shuffle::ShuffleMutation;
pub use swap::SwapMutation;
