//! # Error Types
//!
//! Custom error types for the genetic algorithm engine. Every fallible
//! operation in the crate returns the [`Result`] alias defined here, so a
//! caller deals with exactly one error enum.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use queens_gambit::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use queens_gambit::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[u32]) -> queens_gambit::error::Result<u32> {
//!     scores.iter().min().copied().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm engine.
///
/// Invalid configurations are rejected before any generation runs; the
/// remaining variants cover misuse of the operator seams, which cannot occur
/// once the engine has validated its options.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when parent selection fails.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a crossover operation fails.
    #[error("Crossover error: {0}")]
    Crossover(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use queens_gambit::error::{GeneticError, Result};
///
/// fn may_fail() -> Result<u32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use queens_gambit::error::{GeneticError, OptionExt};
///
/// fn best_score(scores: &[u32]) -> queens_gambit::error::Result<u32> {
///     scores.iter().min().copied().ok_or_else_genetic(||
///         GeneticError::EmptyPopulation
///     )
/// }
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using a closure
    /// to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeneticError::Configuration("Board size must be at least 2".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Board size must be at least 2"
        );

        let err = GeneticError::EmptyPopulation;
        assert!(err.to_string().contains("empty population"));
    }

    #[test]
    fn test_ok_or_else_genetic() {
        let some: Option<u32> = Some(3);
        assert_eq!(
            some.ok_or_else_genetic(|| GeneticError::EmptyPopulation)
                .unwrap(),
            3
        );

        let none: Option<u32> = None;
        let result = none.ok_or_else_genetic(|| GeneticError::EmptyPopulation);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
