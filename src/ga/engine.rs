//! Generational evolution loop.
//!
//! # State machine
//!
//! ```text
//! Initialized ──step──▶ Evolving ──step──▶ … ──last step──▶ Terminated ──finish──▶ Solution
//! ```
//!
//! - **Initialized**: generation 0 has been built by [`initial_population`].
//! - **Evolving**: each [`EvolutionEngine::step`] selects the two fittest
//!   individuals and breeds `population_size` children from them. The
//!   children replace the generation wholesale (no elitism).
//! - **Terminated**: the configured number of generations has run. There is
//!   no early stopping. [`EvolutionEngine::finish`] returns the fittest
//!   individual of the final generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{Error, Result};
use crate::models::{GenerationStats, Item, ScoreTable, Solution};
use crate::validation::validate_input;

use super::fitness::evaluate_population;
use super::operators::GeneticOperators;
use super::population::initial_population;
use super::selection::select_fittest_by;
use super::{GaConfig, ScheduleChromosome};

/// Lifecycle state of an [`EvolutionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Generation 0 exists; no offspring yet.
    Initialized,
    /// At least one generation has been bred; more remain.
    Evolving,
    /// All configured generations have been bred.
    Terminated,
}

/// Owns the population of one run and drives it through the generations.
#[derive(Debug)]
pub struct EvolutionEngine<'a, I: Item> {
    items: &'a [I],
    scores: &'a ScoreTable<I>,
    config: GaConfig,
    operators: GeneticOperators,
    state: EngineState,
    generation: usize,
    population: Vec<ScheduleChromosome<I>>,
    /// Fitness of `population`, index-aligned; replaced with it.
    fitness: Vec<f64>,
    history: Vec<GenerationStats>,
}

impl<'a, I: Item> EvolutionEngine<'a, I> {
    /// Validates the inputs and builds generation 0.
    ///
    /// All configuration errors are reported here, before any breeding.
    #[instrument(level = "debug", skip_all, fields(items = items.len(), population = config.population_size, generations = config.generations))]
    pub fn new<R: Rng>(
        items: &'a [I],
        scores: &'a ScoreTable<I>,
        config: GaConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        validate_input(items, scores)?;

        let population = initial_population(items, config.population_size, rng)?;
        let fitness = evaluate_population(&population, scores)?;
        let mut engine = Self {
            items,
            scores,
            operators: config.operators(),
            config,
            state: EngineState::Initialized,
            generation: 0,
            population,
            fitness,
            history: Vec::new(),
        };
        engine.record_stats();
        Ok(engine)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Index of the current generation (0 = initial population).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The current generation.
    pub fn population(&self) -> &[ScheduleChromosome<I>] {
        &self.population
    }

    /// Statistics recorded so far, one entry per generation.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Run parameters.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Fittest individual of the current generation and its fitness.
    ///
    /// Ties go to the earliest individual in population order.
    pub fn best(&self) -> (&ScheduleChromosome<I>, f64) {
        // population_size > 0 is validated in `new`
        select_fittest_by(&self.population, &self.fitness, 1)[0]
    }

    /// Breeds the next generation and replaces the current one.
    ///
    /// Fails with [`Error::InvalidState`] once the engine has terminated.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        if self.state == EngineState::Terminated {
            return Err(Error::InvalidState {
                expected: EngineState::Evolving,
                actual: self.state,
            });
        }

        // Selection is deterministic over a fixed generation, so the same
        // two parents serve every child of this step.
        let parents = select_fittest_by(&self.population, &self.fitness, 2);
        let (first, _) = parents[0];
        let (second, _) = parents.get(1).copied().unwrap_or(parents[0]);

        let next: Vec<ScheduleChromosome<I>> = (0..self.config.population_size)
            .map(|_| self.operators.breed(first, second, rng))
            .collect();
        assert!(
            next.iter().all(|ch| ch.is_permutation_of(self.items)),
            "generation {} is not a permutation of the input items",
            self.generation + 1
        );

        self.fitness = evaluate_population(&next, self.scores)?;
        self.population = next;
        self.generation += 1;
        self.state = if self.generation >= self.config.generations {
            EngineState::Terminated
        } else {
            EngineState::Evolving
        };
        self.record_stats();
        Ok(())
    }

    /// Consumes a terminated engine and returns the best schedule.
    pub fn finish(self) -> Result<Solution<I>> {
        if self.state != EngineState::Terminated {
            return Err(Error::InvalidState {
                expected: EngineState::Terminated,
                actual: self.state,
            });
        }
        let (best, fitness) = select_fittest_by(&self.population, &self.fitness, 1)[0];
        assert!(
            best.is_permutation_of(self.items),
            "final schedule is not a permutation of the input items"
        );
        let schedule = best.genes.clone();

        tracing::info!(
            generations = self.generation,
            fitness,
            "Optimization finished"
        );
        Ok(Solution {
            schedule,
            fitness,
            history: self.history,
        })
    }

    /// Runs every remaining generation and returns the best schedule.
    pub fn run<R: Rng>(mut self, rng: &mut R) -> Result<Solution<I>> {
        while self.state != EngineState::Terminated {
            self.step(rng)?;
        }
        self.finish()
    }

    fn record_stats(&mut self) {
        if let Some(stats) = GenerationStats::from_fitness(self.generation, &self.fitness) {
            tracing::debug!(
                generation = stats.generation,
                best = stats.best_fitness,
                mean = stats.mean_fitness,
                "Generation evaluated"
            );
            self.history.push(stats);
        }
    }
}

/// Validates the inputs, evolves for `config.generations`, and returns the
/// best schedule with its total score.
pub fn optimize<I: Item, R: Rng>(
    items: &[I],
    scores: &ScoreTable<I>,
    config: GaConfig,
    rng: &mut R,
) -> Result<Solution<I>> {
    EvolutionEngine::new(items, scores, config, rng)?.run(rng)
}
