//! Rate-gated genetic operators.
//!
//! [`GeneticOperators`] bundles the crossover and mutation rates of a run
//! and applies the chromosome-level operators with those probabilities.
//!
//! # Usage
//!
//! ```
//! use tv_schedule_ga::ga::operators::GeneticOperators;
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_rate, 0.8);
//! assert_eq!(ops.mutation_rate, 0.02);
//! ```

use rand::Rng;
use tracing::instrument;

use super::chromosome::{order_crossover_at, swap_mutation, ScheduleChromosome};
use crate::models::Item;

/// Smallest chromosome for which a cut point in `1..=len-2` exists.
pub const MIN_CROSSOVER_LEN: usize = 3;

/// Crossover and mutation rates applied together when breeding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticOperators {
    /// Probability that two parents are recombined.
    pub crossover_rate: f64,
    /// Probability that a child receives one swap.
    pub mutation_rate: f64,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_rate: 0.8,
            mutation_rate: 0.02,
        }
    }
}

impl GeneticOperators {
    /// Creates operators with the given rates.
    pub fn new(crossover_rate: f64, mutation_rate: f64) -> Self {
        Self {
            crossover_rate,
            mutation_rate,
        }
    }

    /// Performs crossover with the configured rate.
    pub fn crossover<I: Item, R: Rng>(
        &self,
        p1: &ScheduleChromosome<I>,
        p2: &ScheduleChromosome<I>,
        rng: &mut R,
    ) -> ScheduleChromosome<I> {
        crossover(p1, p2, self.crossover_rate, rng)
    }

    /// Performs mutation with the configured rate.
    pub fn mutate<I: Item, R: Rng>(&self, chromosome: &mut ScheduleChromosome<I>, rng: &mut R) {
        mutate(chromosome, self.mutation_rate, rng)
    }

    /// Produces one child: crossover followed by mutation.
    pub fn breed<I: Item, R: Rng>(
        &self,
        p1: &ScheduleChromosome<I>,
        p2: &ScheduleChromosome<I>,
        rng: &mut R,
    ) -> ScheduleChromosome<I> {
        let mut child = self.crossover(p1, p2, rng);
        self.mutate(&mut child, rng);
        child
    }
}

/// One-point order crossover gated by `rate`.
///
/// Draws one value in `[0, 1)`. If it is `>= rate`, or the parents have
/// fewer than [`MIN_CROSSOVER_LEN`] items, the child is a copy of `p1`.
/// Otherwise a cut point is drawn from `1..=len-2` and the child is built by
/// [`order_crossover_at`].
#[instrument(level = "trace", skip(p1, p2, rng), fields(len = p1.len()))]
pub fn crossover<I: Item, R: Rng>(
    p1: &ScheduleChromosome<I>,
    p2: &ScheduleChromosome<I>,
    rate: f64,
    rng: &mut R,
) -> ScheduleChromosome<I> {
    let draw: f64 = rng.random();
    if draw >= rate || p1.len() < MIN_CROSSOVER_LEN {
        return p1.clone();
    }
    let point = rng.random_range(1..=p1.len() - 2);
    order_crossover_at(p1, p2, point)
}

/// Swap mutation gated by `rate`.
///
/// Draws one value in `[0, 1)`; if it is below `rate`, two distinct
/// positions are swapped.
#[instrument(level = "trace", skip(chromosome, rng), fields(len = chromosome.len()))]
pub fn mutate<I: Item, R: Rng>(chromosome: &mut ScheduleChromosome<I>, rate: f64, rng: &mut R) {
    let draw: f64 = rng.random();
    if draw < rate {
        swap_mutation(chromosome, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn parents() -> (ScheduleChromosome<&'static str>, ScheduleChromosome<&'static str>) {
        (
            ScheduleChromosome::new(vec!["A", "B", "C", "D", "E"]),
            ScheduleChromosome::new(vec!["E", "D", "C", "B", "A"]),
        )
    }

    #[test]
    fn test_default_operators() {
        let ops = GeneticOperators::default();
        assert_eq!(ops.crossover_rate, 0.8);
        assert_eq!(ops.mutation_rate, 0.02);
    }

    #[test]
    fn test_crossover_rate_zero_copies_first_parent() {
        let (p1, p2) = parents();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let child = crossover(&p1, &p2, 0.0, &mut rng);
            assert_eq!(child, p1);
        }
    }

    #[test]
    fn test_crossover_rate_one_always_recombines() {
        let (p1, p2) = parents();
        let items = p1.genes.clone();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let child = crossover(&p1, &p2, 1.0, &mut rng);
            assert!(child.is_permutation_of(&items));
            // Cut point is in 1..=3: the prefix comes from p1, the rest follows p2's order
            assert_eq!(child.genes[0], "A");
            assert_ne!(child, p1);
            let cut = child
                .genes
                .iter()
                .zip(p1.genes.iter())
                .take_while(|(c, p)| c == p)
                .count();
            let tail: Vec<_> = p2
                .genes
                .iter()
                .filter(|g| !p1.genes[..cut].contains(*g))
                .cloned()
                .collect();
            assert_eq!(&child.genes[cut..], tail.as_slice());
        }
    }

    #[test]
    fn test_crossover_short_parents_are_ineligible() {
        let p1 = ScheduleChromosome::new(vec!["A", "B"]);
        let p2 = ScheduleChromosome::new(vec!["B", "A"]);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(crossover(&p1, &p2, 1.0, &mut rng), p1);
        }

        let single = ScheduleChromosome::new(vec!["A"]);
        assert_eq!(crossover(&single, &single, 1.0, &mut rng), single);
    }

    #[test]
    fn test_mutation_rate_zero_is_noop() {
        let (p1, _) = parents();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = p1.clone();
        for _ in 0..50 {
            mutate(&mut ch, 0.0, &mut rng);
        }
        assert_eq!(ch, p1);
    }

    #[test]
    fn test_mutation_rate_one_always_swaps() {
        let (p1, _) = parents();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = p1.clone();
        mutate(&mut ch, 1.0, &mut rng);
        assert_ne!(ch, p1);
        assert!(ch.is_permutation_of(&p1.genes));
    }

    #[test]
    fn test_breed_keeps_permutation() {
        let (p1, p2) = parents();
        let ops = GeneticOperators::new(0.9, 0.5);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            let child = ops.breed(&p1, &p2, &mut rng);
            assert!(child.is_permutation_of(&p1.genes));
        }
    }
}
