//! Fitness evaluation.
//!
//! Fitness is the plain sum of item scores over an ordering. It is never
//! stored on the chromosome; the engine keeps one value per individual of
//! the current generation and drops them when the generation is replaced.

use crate::error::Result;
use crate::models::{Item, ScoreTable};

use super::ScheduleChromosome;

/// Total score of an ordering.
///
/// Fails with [`crate::Error::MissingScore`] if an item is absent from
/// `scores`; missing data is never defaulted to zero.
pub fn fitness<I: Item>(genes: &[I], scores: &ScoreTable<I>) -> Result<f64> {
    genes.iter().map(|item| scores.score(item)).sum()
}

/// Fitness of every individual, in population order.
pub fn evaluate_population<I: Item>(
    population: &[ScheduleChromosome<I>],
    scores: &ScoreTable<I>,
) -> Result<Vec<f64>> {
    population.iter().map(|ch| ch.fitness(scores)).collect()
}
