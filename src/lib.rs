//! Genetic-algorithm scheduling of TV programs.
//!
//! Given programs with ratings, finds a daily ordering that maximizes the
//! total rating while placing every program exactly once.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ScoreTable`, `Solution`, `GenerationStats`
//! - **`ga`**: Permutation chromosome, operators, selection and the
//!   `EvolutionEngine` generational loop
//! - **`validation`**: Input integrity checks (empty lists, duplicates, missing scores)
//! - **`loader`**: CSV dataset loading with fallback column detection
//! - **`trials`**: Side-by-side runs with different crossover/mutation rates
//! - **`cli`**: Argument parsing and report rendering for the `tvsched` binary
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tv_schedule_ga::ga::{optimize, GaConfig};
//! use tv_schedule_ga::models::ScoreTable;
//!
//! let items = vec!["A", "B", "C"];
//! let scores = ScoreTable::from_pairs([("A", 1.0), ("B", 5.0), ("C", 3.0)])?;
//! let config = GaConfig::default().with_population_size(4).with_generations(20);
//! let solution = optimize(&items, &scores, config, &mut StdRng::seed_from_u64(42))?;
//! assert_eq!(solution.fitness, 9.0);
//! # Ok::<(), tv_schedule_ga::Error>(())
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod cli;
pub mod error;
pub mod ga;
pub mod loader;
pub mod models;
pub mod trials;
pub mod validation;

pub use error::{Error, Result};
