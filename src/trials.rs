//! Multi-trial comparison of rate settings.
//!
//! Runs the optimizer once per [`TrialParameters`] and ranks the outcomes,
//! so different crossover/mutation rates can be compared on one dataset.
//! Each trial gets its own generator seeded with `seed + index`, which makes
//! a single trial reproducible in isolation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::ga::{optimize, GaConfig};
use crate::models::{Item, ScoreTable, Solution};

/// Rates for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialParameters {
    /// Trial label (1-based by convention).
    pub trial: usize,
    /// Crossover rate for this trial.
    pub crossover_rate: f64,
    /// Mutation rate for this trial.
    pub mutation_rate: f64,
}

impl TrialParameters {
    pub fn new(trial: usize, crossover_rate: f64, mutation_rate: f64) -> Self {
        Self {
            trial,
            crossover_rate,
            mutation_rate,
        }
    }

    /// The three reference settings compared by default.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(1, 0.8, 0.02),
            Self::new(2, 0.6, 0.04),
            Self::new(3, 0.9, 0.01),
        ]
    }

    /// `base` with this trial's rates applied.
    pub fn apply(&self, base: &GaConfig) -> GaConfig {
        base.clone()
            .with_crossover_rate(self.crossover_rate)
            .with_mutation_rate(self.mutation_rate)
    }
}

/// Result of one trial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialOutcome<I> {
    /// Parameters the trial ran with.
    pub parameters: TrialParameters,
    /// Best schedule found by the trial.
    pub solution: Solution<I>,
}

impl<I> TrialOutcome<I> {
    /// Total score of the trial's best schedule.
    pub fn fitness(&self) -> f64 {
        self.solution.fitness
    }
}

/// Runs every trial against the same items and scores.
///
/// Any configuration error aborts the whole batch; no partial results are
/// returned.
#[instrument(level = "debug", skip(items, scores, base, trials), fields(trials = trials.len()))]
pub fn run_trials<I: Item>(
    items: &[I],
    scores: &ScoreTable<I>,
    base: &GaConfig,
    trials: &[TrialParameters],
    seed: u64,
) -> Result<Vec<TrialOutcome<I>>> {
    trials
        .iter()
        .enumerate()
        .map(|(idx, params)| {
            let config = params.apply(base);
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(idx as u64));
            let solution = optimize(items, scores, config, &mut rng)?;
            tracing::info!(
                trial = params.trial,
                crossover_rate = params.crossover_rate,
                mutation_rate = params.mutation_rate,
                fitness = solution.fitness,
                "Trial completed"
            );
            Ok(TrialOutcome {
                parameters: *params,
                solution,
            })
        })
        .collect()
}

/// The outcome with the highest fitness; the earliest trial wins ties.
pub fn best_trial<I>(outcomes: &[TrialOutcome<I>]) -> Option<&TrialOutcome<I>> {
    outcomes.iter().fold(None, |best, outcome| match best {
        Some(b) if b.fitness() >= outcome.fitness() => Some(b),
        _ => Some(outcome),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn dataset() -> (Vec<String>, ScoreTable<String>) {
        let items: Vec<String> = ["News", "Drama", "Sports", "Music", "Kids"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let scores = ScoreTable::from_pairs(
            items.iter().cloned().zip([0.3, 0.5, 0.2, 0.4, 0.1]),
        )
        .unwrap();
        (items, scores)
    }

    fn outcome(trial: usize, fitness: f64) -> TrialOutcome<&'static str> {
        TrialOutcome {
            parameters: TrialParameters::new(trial, 0.8, 0.02),
            solution: Solution {
                schedule: vec![],
                fitness,
                history: vec![],
            },
        }
    }

    #[test]
    fn test_default_trials() {
        let trials = TrialParameters::defaults();
        assert_eq!(trials.len(), 3);
        assert_eq!(trials[1], TrialParameters::new(2, 0.6, 0.04));
    }

    #[test]
    fn test_apply_overrides_rates_only() {
        let base = GaConfig::default().with_generations(7);
        let config = TrialParameters::new(1, 0.3, 0.05).apply(&base);
        assert_eq!(config.generations, 7);
        assert_eq!(config.crossover_rate, 0.3);
        assert_eq!(config.mutation_rate, 0.05);
    }

    #[test]
    fn test_run_trials() {
        let (items, scores) = dataset();
        let outcomes =
            run_trials(&items, &scores, &GaConfig::default(), &TrialParameters::defaults(), 42)
                .unwrap();

        assert_eq!(outcomes.len(), 3);
        for outcome in &outcomes {
            assert_eq!(outcome.solution.len(), 5);
            assert!((outcome.fitness() - 1.5).abs() < 1e-9);
        }
        assert_eq!(outcomes[2].parameters.trial, 3);
    }

    #[test]
    fn test_trials_reproducible() {
        let (items, scores) = dataset();
        let trials = TrialParameters::defaults();
        let a = run_trials(&items, &scores, &GaConfig::default(), &trials, 7).unwrap();
        let b = run_trials(&items, &scores, &GaConfig::default(), &trials, 7).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.solution.schedule, y.solution.schedule);
        }
    }

    #[test]
    fn test_invalid_trial_aborts_batch() {
        let (items, scores) = dataset();
        let trials = vec![TrialParameters::new(1, 0.8, 0.02), TrialParameters::new(2, 1.5, 0.02)];
        let err = run_trials(&items, &scores, &GaConfig::default(), &trials, 1).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { field: "crossover_rate", .. }));
    }

    #[test]
    fn test_best_trial() {
        let outcomes = vec![outcome(1, 3.0), outcome(2, 5.0), outcome(3, 5.0)];
        assert_eq!(best_trial(&outcomes).unwrap().parameters.trial, 2);
        assert!(best_trial::<&str>(&[]).is_none());
    }
}
