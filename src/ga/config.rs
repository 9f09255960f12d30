//! Run parameters.
//!
//! Parameters are fixed for the whole run; there is no adaptive control.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::operators::GeneticOperators;

/// Parameters of one optimization run.
///
/// # Example
/// ```
/// use tv_schedule_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_crossover_rate(0.6)
///     .with_mutation_rate(0.04);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.population_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation (> 0).
    pub population_size: usize,
    /// Generations to evolve (> 0). There is no early stopping.
    pub generations: usize,
    /// Probability of recombining two parents, in `[0, 1]`.
    pub crossover_rate: f64,
    /// Probability of one swap per child, in `(0, 1]`.
    pub mutation_rate: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        let ops = GeneticOperators::default();
        Self {
            population_size: 10,
            generations: 50,
            crossover_rate: ops.crossover_rate,
            mutation_rate: ops.mutation_rate,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// The operators configured by these rates.
    pub fn operators(&self) -> GeneticOperators {
        GeneticOperators::new(self.crossover_rate, self.mutation_rate)
    }

    /// Checks every parameter against its allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size", "must be positive"));
        }
        if self.generations == 0 {
            return Err(invalid("generations", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid(
                "crossover_rate",
                format!("must be between 0.0 and 1.0, got {}", self.crossover_rate),
            ));
        }
        if !(self.mutation_rate > 0.0 && self.mutation_rate <= 1.0) {
            return Err(invalid(
                "mutation_rate",
                format!("must be in (0.0, 1.0], got {}", self.mutation_rate),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidConfig {
        field,
        reason: reason.into(),
    }
}
