//! Input validation for scheduling problems.
//!
//! Checks structural integrity of the item list and its scores before
//! any population is created. Detects:
//! - Empty item lists
//! - Duplicate item identities
//! - Items without a score
//! - Non-finite scores (raised while building a [`ScoreTable`])

use crate::models::{Item, ScoreTable};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The item list is empty.
    EmptyItems,
    /// Two items share the same identity.
    DuplicateItem,
    /// An item has no entry in the score table.
    MissingScore,
    /// A score is NaN or infinite.
    NonFiniteScore,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the items and scores for an optimization run.
///
/// Checks:
/// 1. At least one item
/// 2. No duplicate items
/// 3. Every item has a score
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input<I: Item>(items: &[I], scores: &ScoreTable<I>) -> ValidationResult {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyItems,
            "item list is empty",
        ));
    }

    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateItem,
                format!("duplicate item: {item:?}"),
            ));
        }
        if !scores.contains(item) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingScore,
                format!("item {item:?} has no score"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scores() -> ScoreTable<&'static str> {
        ScoreTable::from_pairs([("News", 3.0), ("Drama", 5.0), ("Sports", 4.0)]).unwrap()
    }

    #[test]
    fn test_valid_input() {
        let items = vec!["News", "Drama", "Sports"];
        assert!(validate_input(&items, &sample_scores()).is_ok());
    }

    #[test]
    fn test_extra_scores_are_allowed() {
        let items = vec!["News"];
        assert!(validate_input(&items, &sample_scores()).is_ok());
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<&str> = vec![];
        let errors = validate_input(&items, &sample_scores()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyItems);
    }

    #[test]
    fn test_duplicate_item() {
        let items = vec!["News", "Drama", "News"];
        let errors = validate_input(&items, &sample_scores()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateItem && e.message.contains("News")));
    }

    #[test]
    fn test_missing_score() {
        let items = vec!["News", "Cartoons"];
        let errors = validate_input(&items, &sample_scores()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingScore));
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate + missing score
        let items = vec!["Cartoons", "Cartoons"];
        let errors = validate_input(&items, &sample_scores()).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
