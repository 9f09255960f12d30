//! Permutation chromosome for single-slot scheduling.
//!
//! # Encoding
//!
//! A chromosome is an ordering of all items: position k holds the item
//! broadcast in slot k+1. Every item appears exactly once, and every operator
//! in this module preserves that invariant.
//!
//! # Reference
//! Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains" (order crossover)

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::models::{Item, ScoreTable};

/// Permutation chromosome: one candidate schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleChromosome<I> {
    /// Items in broadcast order.
    pub genes: Vec<I>,
}

impl<I: Item> ScheduleChromosome<I> {
    /// Wraps an existing ordering.
    pub fn new(genes: Vec<I>) -> Self {
        Self { genes }
    }

    /// Creates a uniformly random permutation of `items`.
    pub fn random<R: Rng>(items: &[I], rng: &mut R) -> Self {
        let mut genes = items.to_vec();
        genes.shuffle(rng);
        Self { genes }
    }

    /// Number of scheduled items.
    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Total score of this ordering.
    pub fn fitness(&self, scores: &ScoreTable<I>) -> Result<f64> {
        super::fitness::fitness(&self.genes, scores)
    }

    /// Checks that this chromosome is a permutation of `items`.
    ///
    /// `items` is assumed to be duplicate-free.
    pub fn is_permutation_of(&self, items: &[I]) -> bool {
        if self.genes.len() != items.len() {
            return false;
        }
        let expected: HashSet<&I> = items.iter().collect();
        let mut seen = HashSet::with_capacity(self.genes.len());
        self.genes
            .iter()
            .all(|gene| expected.contains(gene) && seen.insert(gene))
    }
}

// ======================== Crossover operators ========================

/// Order crossover at a fixed cut point.
///
/// Copies `p1[..point]` verbatim, then appends the items of `p2` in their
/// original order, skipping those already taken from `p1`.
///
/// # Panics
/// If the parents are not permutations of the same item set, the child
/// would be malformed; this is a defect and panics.
pub fn order_crossover_at<I: Item>(
    p1: &ScheduleChromosome<I>,
    p2: &ScheduleChromosome<I>,
    point: usize,
) -> ScheduleChromosome<I> {
    let prefix = &p1.genes[..point];
    let taken: HashSet<&I> = prefix.iter().collect();

    let mut genes = Vec::with_capacity(p1.len());
    genes.extend_from_slice(prefix);
    genes.extend(p2.genes.iter().filter(|g| !taken.contains(g)).cloned());

    let child = ScheduleChromosome { genes };
    assert!(
        child.is_permutation_of(&p1.genes),
        "order crossover produced a child that is not a permutation of its parents' items"
    );
    child
}

// ======================== Mutation operators ========================

/// Swap mutation: exchanges the items at two distinct random positions.
///
/// Chromosomes with fewer than two items are left unchanged.
pub fn swap_mutation<I: Item, R: Rng>(chromosome: &mut ScheduleChromosome<I>, rng: &mut R) {
    let len = chromosome.len();
    if len < 2 {
        return;
    }
    let picked = rand::seq::index::sample(rng, len, 2);
    chromosome.genes.swap(picked.index(0), picked.index(1));
}
