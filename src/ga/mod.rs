//! GA-based schedule optimization.
//!
//! Implements a generational genetic algorithm over permutation chromosomes.
//! Randomness is always passed in as `&mut impl Rng`, so a seeded generator
//! reproduces a run exactly and concurrent runs never share state.
//!
//! # Pipeline
//!
//! 1. [`initial_population`]: independent uniform shuffles
//! 2. [`select_fittest`]: truncation selection, stable on ties
//! 3. [`operators::crossover`]: one-point order crossover, gated by rate
//! 4. [`operators::mutate`]: two-position swap, gated by rate
//! 5. [`EvolutionEngine`]: strict generational replacement for a fixed
//!    number of generations
//!
//! # Submodules
//!
//! - [`operators`]: Rate-gated crossover and mutation
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

mod chromosome;
mod config;
mod engine;
mod fitness;
pub mod operators;
mod population;
mod selection;

pub use chromosome::{order_crossover_at, swap_mutation, ScheduleChromosome};
pub use config::GaConfig;
pub use engine::{optimize, EngineState, EvolutionEngine};
pub use fitness::{evaluate_population, fitness};
pub use population::initial_population;
pub use selection::{rank_indices, select_fittest, select_fittest_by};
