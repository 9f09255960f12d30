//! Schedule (solution) model.
//!
//! A solution is the best ordering found by a run together with its total
//! rating and the per-generation statistics collected along the way.

use serde::{Deserialize, Serialize};

/// Fitness statistics of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation index (0 = initial population).
    pub generation: usize,
    /// Highest fitness in the generation.
    pub best_fitness: f64,
    /// Mean fitness over the generation.
    pub mean_fitness: f64,
    /// Lowest fitness in the generation.
    pub worst_fitness: f64,
}

impl GenerationStats {
    /// Computes statistics from the fitness values of one generation.
    ///
    /// Returns `None` for an empty generation.
    pub fn from_fitness(generation: usize, fitness: &[f64]) -> Option<Self> {
        if fitness.is_empty() {
            return None;
        }
        let best = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = fitness.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = fitness.iter().sum::<f64>() / fitness.len() as f64;
        Some(Self {
            generation,
            best_fitness: best,
            mean_fitness: mean,
            worst_fitness: worst,
        })
    }
}

/// One position in a rendered schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot<I> {
    /// 1-based broadcast order.
    pub order: usize,
    /// Scheduled item.
    pub item: I,
}

/// The result of an optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution<I> {
    /// Best ordering found; a full permutation of the input items.
    pub schedule: Vec<I>,
    /// Total score of `schedule`.
    pub fitness: f64,
    /// Statistics for every generation, initial population included.
    pub history: Vec<GenerationStats>,
}

impl<I: Clone> Solution<I> {
    /// Numbered slots of the schedule, starting at 1.
    pub fn slots(&self) -> Vec<Slot<I>> {
        self.schedule
            .iter()
            .enumerate()
            .map(|(i, item)| Slot {
                order: i + 1,
                item: item.clone(),
            })
            .collect()
    }

    /// Number of scheduled items.
    #[inline]
    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    /// Whether the schedule is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}
