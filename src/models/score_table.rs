//! Item desirability scores.
//!
//! A [`ScoreTable`] maps each schedulable item (e.g. a program name) to its
//! rating. It is built once from external input and never mutated during a run.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Trait alias for item identities: opaque, hashable, comparable tokens.
pub trait Item: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Item for T {}

/// Immutable mapping from item identity to a finite score.
#[derive(Debug, Clone)]
pub struct ScoreTable<I: Item> {
    scores: HashMap<I, f64>,
}

impl<I: Item> ScoreTable<I> {
    /// Builds a table from `(item, score)` pairs.
    ///
    /// Every score must be finite and every item must appear once. All
    /// offending entries are reported together.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (I, f64)>) -> Result<Self> {
        let mut scores = HashMap::new();
        let mut errors = Vec::new();

        for (item, score) in pairs {
            if !score.is_finite() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonFiniteScore,
                    format!("score for item {item:?} is not finite: {score}"),
                ));
                continue;
            }
            if scores.contains_key(&item) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateItem,
                    format!("duplicate score for item {item:?}"),
                ));
                continue;
            }
            scores.insert(item, score);
        }

        if errors.is_empty() {
            Ok(Self { scores })
        } else {
            Err(Error::Validation(errors))
        }
    }

    /// Looks up the score of an item.
    pub fn get(&self, item: &I) -> Option<f64> {
        self.scores.get(item).copied()
    }

    /// Looks up the score of an item, failing if it is absent.
    pub fn score(&self, item: &I) -> Result<f64> {
        self.get(item)
            .ok_or_else(|| Error::MissingScore(format!("{item:?}")))
    }

    /// Whether the table has a score for `item`.
    pub fn contains(&self, item: &I) -> bool {
        self.scores.contains_key(item)
    }

    /// Number of scored items.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table = ScoreTable::from_pairs([("A", 1.0), ("B", -2.5), ("C", 0.0)]).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&"B"), Some(-2.5));
        assert_eq!(table.score(&"C").unwrap(), 0.0);
        assert!(table.get(&"Z").is_none());
    }

    #[test]
    fn test_missing_score_is_error() {
        let table = ScoreTable::from_pairs([("A", 1.0)]).unwrap();
        assert!(matches!(table.score(&"Z"), Err(Error::MissingScore(_))));
    }

    #[test]
    fn test_rejects_non_finite_and_duplicates() {
        let err = ScoreTable::from_pairs([("A", f64::NAN), ("B", 1.0), ("B", 2.0)]).unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::NonFiniteScore));
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::DuplicateItem));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
