//! Truncation selection.
//!
//! Ranks a generation by fitness and keeps the top `k`. The engine uses
//! `k = 2` to pick breeding parents and `k = 1` to pick the final result.
//! Selection is deterministic: no sampling, no tournaments.
//!
//! # Ties
//! Ranking uses a stable sort, so individuals with equal fitness keep
//! their population order. Under a fixed seed this keeps runs reproducible.

use std::cmp::Ordering;

use crate::error::Result;
use crate::models::{Item, ScoreTable};

use super::fitness::evaluate_population;
use super::ScheduleChromosome;

/// Population indices sorted by fitness, best first.
///
/// Equal fitness values keep their original relative order.
pub fn rank_indices(fitness: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| descending(fitness[a], fitness[b]));
    order
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Returns the `k` fittest individuals, fitness-descending.
///
/// If `k` exceeds the population size the whole population is returned,
/// ranked.
pub fn select_fittest<'a, I: Item>(
    population: &'a [ScheduleChromosome<I>],
    scores: &ScoreTable<I>,
    k: usize,
) -> Result<Vec<&'a ScheduleChromosome<I>>> {
    let fitness = evaluate_population(population, scores)?;
    Ok(select_fittest_by(population, &fitness, k)
        .into_iter()
        .map(|(chromosome, _)| chromosome)
        .collect())
}

/// Same as [`select_fittest`], over fitness values already computed.
///
/// `fitness[i]` belongs to `population[i]`. Each selected individual is
/// returned with its fitness.
pub fn select_fittest_by<'a, I: Item>(
    population: &'a [ScheduleChromosome<I>],
    fitness: &[f64],
    k: usize,
) -> Vec<(&'a ScheduleChromosome<I>, f64)> {
    assert_eq!(
        population.len(),
        fitness.len(),
        "population and fitness lengths differ"
    );
    rank_indices(fitness)
        .into_iter()
        .take(k)
        .map(|idx| (&population[idx], fitness[idx]))
        .collect()
}
