//! Initial population.

use rand::Rng;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::models::Item;

use super::ScheduleChromosome;

/// Builds generation 0: `size` independent uniform shuffles of `items`.
#[instrument(level = "debug", skip(items, rng), fields(items = items.len()))]
pub fn initial_population<I: Item, R: Rng>(
    items: &[I],
    size: usize,
    rng: &mut R,
) -> Result<Vec<ScheduleChromosome<I>>> {
    if size == 0 {
        return Err(Error::InvalidConfig {
            field: "population_size",
            reason: "must be positive".into(),
        });
    }
    Ok((0..size)
        .map(|_| ScheduleChromosome::random(items, rng))
        .collect())
}
